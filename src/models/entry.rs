use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A time entry as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(default)]
    pub id: Option<u64>,
    pub date: NaiveDate, // "YYYY-MM-DD"
    pub hours: f64,
    #[serde(default)]
    pub notes: Option<String>,
    pub task_id: u64,
    #[serde(default)]
    pub user_id: Option<u64>,
}

/// Payload submitted to create a new entry (`POST entries.json`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub hours: f64,
    pub notes: String,
    pub task_id: u64,
    pub user_id: u64,
}

impl TimeEntry {
    pub fn new(date: NaiveDate, hours: f64, task_id: u64) -> Self {
        Self {
            id: None,
            date,
            hours,
            notes: None,
            task_id,
            user_id: None,
        }
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}
