use shared::{CategoryFilter, DayKind, LessonIndex, LessonRecord, MonthCursor, MonthGrid};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::category_tabs::CategoryTabs;
use super::lesson_popup::LessonPopup;
use crate::hooks::{use_calendar, use_outside_click};
use crate::services::date_utils;
use crate::services::logging::Logger;

/// Maximum indicator dots rendered per day cell
const MAX_LESSON_DOTS: usize = 3;

/// Clicks landing on anything matched by this selector keep the open popup
/// alive: the popup itself and its origin day cell
const POPUP_KEEP_SELECTOR: &str = ".lessons-popup, .calendar-day.popup-open";

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub index: LessonIndex,
}

/// The month-view booking calendar.
///
/// Renders a fixed 42-cell grid (Monday-first) for the cursor month,
/// overlays lesson indicators and previews on days that have lessons after
/// category filtering, and opens a per-day detail popup. The popup slot,
/// the active filter and the month cursor are the widget's only state.
#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let index = &props.index;
    let nav = use_calendar(MonthCursor::new(index.year, index.month));
    let active_filter = use_state(|| CategoryFilter::All);
    // Day number of the cell whose popup is open. A single slot, so at
    // most one popup ever exists; opening another day replaces it.
    let open_popup = use_state(|| Option::<u32>::None);

    let cursor = nav.cursor;
    let grid = MonthGrid::build(cursor.year, cursor.month);
    let today = date_utils::current_ymd();

    // A month the host never supplied renders empty rather than erroring
    if !index.all_months.contains_key(&LessonIndex::month_key(cursor.year, cursor.month)) {
        Logger::warn_with_component(
            "calendar",
            &format!("no lesson data for {}-{}", cursor.year, cursor.month),
        );
    }

    let on_select_category = {
        let active_filter = active_filter.clone();
        use_callback((), move |filter: CategoryFilter, _| {
            Logger::debug_with_component("calendar", &format!("filter set to {}", filter.slug()));
            active_filter.set(filter);
        })
    };

    // Clicks on navigation buttons and tabs land outside the open cell, so
    // the outside-click listener also covers dismissal on navigation and
    // on filter changes.
    let on_outside = {
        let open_popup = open_popup.clone();
        use_callback((), move |(), _| open_popup.set(None))
    };
    use_outside_click(open_popup.is_some(), POPUP_KEEP_SELECTOR, on_outside);

    let cells: Vec<Html> = grid
        .cells
        .iter()
        .map(|cell| match cell.kind {
            DayKind::PrevMonth | DayKind::NextMonth => html! {
                <div class="calendar-day other-month">
                    <div class="day-number">{cell.day}</div>
                </div>
            },
            DayKind::CurrentMonth => {
                let day = cell.day;
                let lessons: Vec<LessonRecord> = active_filter
                    .apply(index.lessons_on(cursor.year, cursor.month, day))
                    .into_iter()
                    .cloned()
                    .collect();
                let has_lessons = !lessons.is_empty();
                let popup_open = has_lessons && *open_popup == Some(day);

                let onclick = has_lessons.then(|| {
                    let open_popup = open_popup.clone();
                    Callback::from(move |event: MouseEvent| {
                        event.stop_propagation();
                        open_popup.set(Some(day));
                    })
                });

                html! {
                    <div
                        class={classes!(
                            "calendar-day",
                            has_lessons.then_some("has-lessons"),
                            grid.is_today(*cell, today).then_some("today"),
                            popup_open.then_some("popup-open"),
                        )}
                        {onclick}
                    >
                        <div class="day-number">{day}</div>
                        {if has_lessons {
                            html! {
                                <>
                                    <div class="lesson-dots">
                                        {for lessons.iter().take(MAX_LESSON_DOTS).map(|_| html! {
                                            <span class="lesson-dot"></span>
                                        })}
                                    </div>
                                    {for lessons.iter().map(|lesson| {
                                        // A preview line is a plain link to the
                                        // lesson detail page; it never opens the popup
                                        let stop = Callback::from(|event: MouseEvent| {
                                            event.stop_propagation();
                                        });
                                        html! {
                                            <a
                                                class="lesson-preview"
                                                href={index.detail_url(lesson.id)}
                                                onclick={stop}
                                            >
                                                <span class="preview-time">{&lesson.time}</span>
                                                <span class="preview-title">{&lesson.title}</span>
                                                <span class="preview-spots">
                                                    {format!("{}/{}", lesson.available_spots, lesson.capacity)}
                                                </span>
                                            </a>
                                        }
                                    })}
                                </>
                            }
                        } else {
                            html! {}
                        }}
                        {if popup_open {
                            html! {
                                <LessonPopup
                                    lessons={lessons.clone()}
                                    detail_base={index.lesson_detail_base.clone()}
                                />
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                }
            }
        })
        .collect();

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button
                    class="calendar-nav"
                    onclick={nav.prev_month.clone()}
                    title="Previous month"
                >
                    {"◀"}
                </button>
                <div class="calendar-month-label">{date_utils::month_label(cursor)}</div>
                <button
                    class="calendar-nav"
                    onclick={nav.next_month.clone()}
                    title="Next month"
                >
                    {"▶"}
                </button>
            </div>

            <CategoryTabs
                categories={index.categories.clone()}
                active={(*active_filter).clone()}
                on_select={on_select_category}
            />

            <div class="calendar-weekdays">
                <div class="weekday">{"Mon"}</div>
                <div class="weekday">{"Tue"}</div>
                <div class="weekday">{"Wed"}</div>
                <div class="weekday">{"Thu"}</div>
                <div class="weekday">{"Fri"}</div>
                <div class="weekday">{"Sat"}</div>
                <div class="weekday">{"Sun"}</div>
            </div>
            <div class="calendar-grid">
                {for cells}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use shared::{CategoryTab, DayLessons, LessonIndex, LessonRecord};
    use std::collections::BTreeMap;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn lesson(id: u64, time: &str, title: &str) -> LessonRecord {
        LessonRecord {
            id,
            time: time.to_string(),
            title: title.to_string(),
            instructor: "Jana Novak".to_string(),
            location: "Studio A".to_string(),
            duration: 60,
            capacity: 12,
            available_spots: 5,
            price: 250.0,
            category: "yoga".to_string(),
        }
    }

    fn two_day_index() -> LessonIndex {
        let mut february = DayLessons::new();
        february.insert("2024-02-10".to_string(), vec![lesson(1, "09:00", "Morning Yoga")]);
        february.insert("2024-02-12".to_string(), vec![lesson(2, "17:00", "Power Yoga")]);

        let mut all_months = BTreeMap::new();
        all_months.insert("2024-2".to_string(), february);

        LessonIndex {
            year: 2024,
            month: 2,
            all_months,
            categories: vec![CategoryTab { slug: "yoga".to_string(), name: "Yoga".to_string() }],
            lesson_detail_base: "/lesson/0/".to_string(),
        }
    }

    fn click_lesson_cell(mount: &Element, nth: u32) {
        let cells = mount
            .query_selector_all(".calendar-day.has-lessons")
            .expect("selector should be valid");
        assert_eq!(cells.length(), 2);
        cells
            .get(nth)
            .expect("cell should exist")
            .dyn_into::<HtmlElement>()
            .expect("cell should be an html element")
            .click();
    }

    #[wasm_bindgen_test]
    async fn opening_a_second_popup_replaces_the_first() {
        let document = web_sys::window().unwrap().document().unwrap();
        let mount = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&mount).unwrap();

        let _app = yew::Renderer::<Calendar>::with_root_and_props(
            mount.clone(),
            CalendarProps { index: two_day_index() },
        )
        .render();
        TimeoutFuture::new(50).await;

        // Open the popup for day 10
        click_lesson_cell(&mount, 0);
        TimeoutFuture::new(50).await;
        assert_eq!(mount.query_selector_all(".lessons-popup").unwrap().length(), 1);

        // Opening day 12 replaces it; never two popups at once
        click_lesson_cell(&mount, 1);
        TimeoutFuture::new(50).await;
        let popups = mount.query_selector_all(".lessons-popup").unwrap();
        assert_eq!(popups.length(), 1);

        // The surviving popup sits inside day 12's cell
        let popup = popups.get(0).unwrap().dyn_into::<Element>().unwrap();
        let cell = popup
            .closest(".calendar-day")
            .unwrap()
            .expect("popup should live inside a day cell");
        let day_number = cell
            .query_selector(".day-number")
            .unwrap()
            .expect("cell should carry its day number")
            .text_content()
            .unwrap_or_default();
        assert_eq!(day_number, "12");

        mount.remove();
    }
}
