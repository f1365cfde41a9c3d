pub mod batch;
pub mod cache;
pub mod entry;
pub mod report;
pub mod setup;
pub mod week;
