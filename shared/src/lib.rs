use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One scheduled, bookable class occurrence with capacity and pricing metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonRecord {
    pub id: u64,
    /// Start time as "HH:MM"
    pub time: String,
    pub title: String,
    pub instructor: String,
    pub location: String,
    /// Lesson length in minutes
    pub duration: u32,
    /// Maximum number of participants
    pub capacity: u32,
    /// Seats still open for booking
    pub available_spots: u32,
    pub price: f64,
    /// Category slug used by the filter tabs
    pub category: String,
}

/// One entry of the category filter bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTab {
    pub slug: String,
    pub name: String,
}

/// Lessons of a single month, keyed by zero-padded "YYYY-MM-DD"
pub type DayLessons = BTreeMap<String, Vec<LessonRecord>>;

/// The multi-month lesson index embedded by the host page.
///
/// Covers every month the page was rendered with, so month navigation never
/// needs a re-fetch. A month missing from `all_months` simply renders with
/// zero lessons on every day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonIndex {
    /// Initially displayed year
    pub year: i32,
    /// Initially displayed month (1-based)
    pub month: u32,
    /// Month buckets keyed by "{year}-{month}" (month 1-based, not padded),
    /// each mapping "YYYY-MM-DD" to the lessons scheduled that day
    #[serde(rename = "allMonths")]
    pub all_months: BTreeMap<String, DayLessons>,
    /// Tabs shown in the filter bar, in display order
    #[serde(default)]
    pub categories: Vec<CategoryTab>,
    /// Detail-page URL template ending in "0/"; the lesson id replaces the 0
    #[serde(rename = "lessonDetailBase")]
    pub lesson_detail_base: String,
}

impl LessonIndex {
    pub fn month_key(year: i32, month: u32) -> String {
        format!("{}-{}", year, month)
    }

    pub fn day_key(year: i32, month: u32, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", year, month, day)
    }

    /// Lessons scheduled on the given day, in the order the host supplied
    /// them. A month or day absent from the index yields an empty slice.
    pub fn lessons_on(&self, year: i32, month: u32, day: u32) -> &[LessonRecord] {
        self.all_months
            .get(&Self::month_key(year, month))
            .and_then(|days| days.get(&Self::day_key(year, month, day)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Detail-page URL for one lesson
    pub fn detail_url(&self, id: u64) -> String {
        detail_url(&self.lesson_detail_base, id)
    }
}

/// Substitutes a lesson id into a detail URL template ending in "0/"
pub fn detail_url(base: &str, id: u64) -> String {
    match base.strip_suffix("0/") {
        Some(prefix) => format!("{}{}/", prefix, id),
        // Template without the placeholder segment; leave it untouched
        None => base.to_string(),
    }
}

/// The currently selected lesson-type filter.
///
/// Selected by the category tabs and applied to every rendered preview;
/// persists across month navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses a tab's `data-category` value; "all" is the default tab
    pub fn from_slug(slug: &str) -> Self {
        if slug == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(slug.to_string())
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(slug) => slug,
        }
    }

    pub fn matches(&self, lesson: &LessonRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(slug) => lesson.category == *slug,
        }
    }

    /// Keeps only matching records, preserving their original order
    pub fn apply<'a>(&self, lessons: &'a [LessonRecord]) -> Vec<&'a LessonRecord> {
        lessons.iter().filter(|lesson| self.matches(lesson)).collect()
    }
}

/// The displayed (year, month) pair, month 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }
}

/// Which month a grid cell's day number belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// Trailing day of the previous month, non-interactive
    PrevMonth,
    /// Day of the displayed month
    CurrentMonth,
    /// Leading day of the next month, non-interactive
    NextMonth,
}

/// One of the 42 rendered day boxes in a month view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub day: u32,
    pub kind: DayKind,
}

/// The computed cell layout of one displayed month.
///
/// Always exactly 42 cells (6 rows of 7), partitioned into `leading`
/// trailing-previous-month days, the current month's days, and `trailing`
/// next-month days. The week starts on Monday, so `leading` is the first
/// day's weekday remapped Monday=0..Sunday=6.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub leading: u32,
    pub days_in_month: u32,
    pub trailing: u32,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    pub const CELL_COUNT: u32 = 42;

    pub fn build(year: i32, month: u32) -> Self {
        // Native weekday has Sunday=0; the grid header starts on Monday
        let native_weekday = NaiveDate::from_ymd_opt(year, month, 1)
            .map_or(0, |date| date.weekday().num_days_from_sunday());
        let leading = (native_weekday + 6) % 7;
        let days = days_in_month(year, month);
        let trailing = Self::CELL_COUNT - leading - days;

        let prev = MonthCursor::new(year, month).prev();
        let prev_days = days_in_month(prev.year, prev.month);

        let mut cells = Vec::with_capacity(Self::CELL_COUNT as usize);
        for day in (prev_days - leading + 1)..=prev_days {
            cells.push(GridCell { day, kind: DayKind::PrevMonth });
        }
        for day in 1..=days {
            cells.push(GridCell { day, kind: DayKind::CurrentMonth });
        }
        for day in 1..=trailing {
            cells.push(GridCell { day, kind: DayKind::NextMonth });
        }

        Self { year, month, leading, days_in_month: days, trailing, cells }
    }

    /// Whether a cell is the real current day.
    ///
    /// Compares the full calendar identity (year, month, day); an
    /// other-month cell sharing today's day number must never match.
    pub fn is_today(&self, cell: GridCell, today: (i32, u32, u32)) -> bool {
        let (year, month, day) = today;
        cell.kind == DayKind::CurrentMonth
            && self.year == year
            && self.month == month
            && cell.day == day
    }
}

/// Get days in a month (accounting for leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// English month name, 1-based
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid",
    }
}
