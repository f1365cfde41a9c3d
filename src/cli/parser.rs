use crate::export::ExportFormat;
use clap::{Parser, ValueEnum};

/// Command-line interface definition for Tickory
/// Interactive CLI to enter time into Tickspot and review the current week
#[derive(Parser, Debug)]
#[command(
    name = "tickory",
    version = env!("CARGO_PKG_VERSION"),
    about = "An unofficial CLI for Tick time tracking: enter time, batch recurring entries and view your weekly report",
    long_about = None
)]
pub struct Cli {
    /// Remove saved data before starting: `all` (credentials and project data) or `project-data`
    #[arg(long = "clean", value_enum, value_name = "SCOPE")]
    pub clean: Option<CleanScope>,

    /// Unlock the batch entry of recurring tasks in the main menu
    #[arg(long = "experimentalmode")]
    pub experimental_mode: bool,

    /// Recurring-entries file (default: ./config.json)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Also write the weekly report rows to FILE when viewing the report
    #[arg(long = "export", value_name = "FILE")]
    pub export: Option<String>,

    /// Format used with --export
    #[arg(long = "format", value_enum, default_value = "csv", requires = "export")]
    pub format: ExportFormat,

    /// Show only Monday to Friday in the weekly report
    #[arg(long = "no-weekend")]
    pub no_weekend: bool,

    /// Override the directory holding settings, credentials and cache (useful for tests)
    #[arg(long = "data-dir", value_name = "DIR", hide = true)]
    pub data_dir: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CleanScope {
    /// Credentials and cached project data
    All,
    /// Cached project data only
    ProjectData,
}
