pub mod calendar;
pub mod category_tabs;
pub mod lesson_popup;
pub mod navbar;

pub use calendar::Calendar;
pub use navbar::Navbar;
