pub mod use_calendar;
pub mod use_outside_click;

pub use use_calendar::use_calendar;
pub use use_outside_click::use_outside_click;
