pub mod batch;
pub mod clean;
pub mod entry;
pub mod menu;
pub mod report;
