pub mod date_utils;
pub mod lessons_data;
pub mod logging;
