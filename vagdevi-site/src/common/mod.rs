pub mod messages;
pub mod ui_utils;
