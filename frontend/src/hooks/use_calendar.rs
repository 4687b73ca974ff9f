use shared::MonthCursor;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Clone)]
pub struct UseCalendarResult {
    pub cursor: MonthCursor,
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

/// Month navigation state for the calendar widget.
///
/// Shifting past January or December rolls the year over. Navigation never
/// fetches anything; the embedded index already covers every month the host
/// page knows about, and a month absent from it simply renders empty.
#[hook]
pub fn use_calendar(initial: MonthCursor) -> UseCalendarResult {
    let cursor = use_state(|| initial);

    let prev_month = {
        let cursor = cursor.clone();
        use_callback((), move |_: MouseEvent, _| {
            let target = cursor.prev();
            Logger::debug_with_component(
                "calendar",
                &format!("navigating to {}-{}", target.year, target.month),
            );
            cursor.set(target);
        })
    };

    let next_month = {
        let cursor = cursor.clone();
        use_callback((), move |_: MouseEvent, _| {
            let target = cursor.next();
            Logger::debug_with_component(
                "calendar",
                &format!("navigating to {}-{}", target.year, target.month),
            );
            cursor.set(target);
        })
    };

    UseCalendarResult { cursor: *cursor, prev_month, next_month }
}
