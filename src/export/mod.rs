// src/export/mod.rs

mod json_csv;

use crate::core::report::ReportAggregator;
use crate::errors::{AppError, AppResult};
use crate::models::report_row::ReportRow;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the day-summary and detail rows of a weekly report to `path`.
pub fn export_report(rows: &[ReportRow], format: ExportFormat, path: &Path) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "output path is a directory: {}",
            path.display()
        )));
    }

    let flat = ReportAggregator::to_export(rows);
    match format {
        ExportFormat::Csv => json_csv::export_csv(&flat, path),
        ExportFormat::Json => json_csv::export_json(&flat, path),
    }
}
