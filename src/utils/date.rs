use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Strict `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.trim().to_string()))
}

/// `YYYY-MM-DD`, the only date format the remote service accepts.
pub fn to_api_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Short human form used in greetings, e.g. "Jan 01".
pub fn to_friendly(d: &NaiveDate) -> String {
    d.format("%b %d").to_string()
}
