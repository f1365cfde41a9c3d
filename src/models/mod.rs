pub mod account;
pub mod catalog;
pub mod entry;
pub mod recurring;
pub mod report_row;
pub mod week_window;
