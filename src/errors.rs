//! Unified application error type.
//! All modules (remote, core, cli, config, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Remote service
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Tickspot returned {status} for {path}")]
    Remote { status: u16, path: String },

    #[error("Tickspot kept paging {path} past {pages} pages")]
    Pagination { path: String, pages: u32 },

    #[error("Unable to validate your Tickspot credentials")]
    Authentication,

    #[error("No users are assigned to this Tickspot subscription")]
    NoUsers,

    #[error("Batch entry aborted after {submitted} submission(s): {reason}")]
    BatchAborted { submitted: usize, reason: String },

    // ---------------------------
    // Local files
    // ---------------------------
    #[error("Invalid cache file {path}: {reason}")]
    InvalidCache { path: String, reason: String },

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    // ---------------------------
    // Parsing / input errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input aborted: {0}")]
    PromptAborted(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid settings file: {0}")]
    Settings(#[from] serde_yaml::Error),

    #[error("The configuration file is not valid:\n{}", .0.join("\n"))]
    InvalidConfig(Vec<String>),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
