use chrono::NaiveDate;
use serde::Serialize;

use crate::models::week_window::DayLabel;

/// One line of the weekly report table. Order in the report is significant.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRow {
    Header,
    Spacer,
    DaySummary {
        day: DayLabel,
        date: NaiveDate,
        hours: f64,
    },
    ProjectDetail {
        client: String,
        project: String,
        task: String,
        hours: f64,
    },
    Footer {
        total: f64,
    },
}

pub const HEADER_COLUMNS: [&str; 6] = ["Day", "Date", "Client", "Project", "Task", "Hours"];

/// Flat shape of a data row, used by CSV / JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport {
    pub day: String,
    pub date: String,
    pub client: String,
    pub project: String,
    pub task: String,
    pub hours: f64,
}

impl ReportRow {
    pub fn is_detail(&self) -> bool {
        matches!(self, ReportRow::ProjectDetail { .. })
    }

    /// The six cells as displayed, hours excluded for the header.
    pub fn cells(&self) -> [String; 6] {
        use crate::utils::formatting::format_hours;

        match self {
            ReportRow::Header => HEADER_COLUMNS.map(String::from),
            ReportRow::Spacer => Default::default(),
            ReportRow::DaySummary { day, date, hours } => [
                day.as_str().to_string(),
                date.format("%Y-%m-%d").to_string(),
                String::new(),
                String::new(),
                String::new(),
                format_hours(*hours),
            ],
            ReportRow::ProjectDetail {
                client,
                project,
                task,
                hours,
            } => [
                String::new(),
                String::new(),
                client.clone(),
                project.clone(),
                task.clone(),
                format_hours(*hours),
            ],
            ReportRow::Footer { total } => [
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                "Weekly Total".to_string(),
                format_hours(*total),
            ],
        }
    }
}
