use shared::{month_name, MonthCursor};

/// Real current (year, month, day) from the browser clock, month 1-based
pub fn current_ymd() -> (i32, u32, u32) {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();
    (year as i32, month, day)
}

/// Label shown between the navigation buttons (e.g. "February 2024")
pub fn month_label(cursor: MonthCursor) -> String {
    format!("{} {}", month_name(cursor.month), cursor.year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn current_ymd_is_a_plausible_date() {
        let (year, month, day) = current_ymd();
        assert!(year >= 2024);
        assert!((1..=12).contains(&month));
        assert!((1..=31).contains(&day));
    }

    #[wasm_bindgen_test]
    fn month_label_formats_name_and_year() {
        assert_eq!(month_label(MonthCursor::new(2024, 2)), "February 2024");
        assert_eq!(month_label(MonthCursor::new(2025, 12)), "December 2025");
    }
}
