use serde::{Deserialize, Serialize};

/// Template entry replayed on every weekday of the current week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringEntry {
    pub hours: f64,
    pub task_id: u64,
    pub notes: String,
}

/// Shape of `config.json`. The key keeps its historical spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringConfig {
    #[serde(rename = "reoccuringEntries")]
    pub reoccuring_entries: Vec<RecurringEntry>,
}
