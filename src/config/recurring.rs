//! Loading and validation of the recurring-entries file (`config.json`).

use crate::errors::{AppError, AppResult};
use crate::models::recurring::RecurringConfig;
use crate::ui::messages::info;
use crate::utils::fs::file_exists;
use crate::utils::path::expand_tilde;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Resolve which file to read.
///
/// - explicit path missing → `ConfigNotFound` (the caller may carry on)
/// - no path and no `./config.json` → `Config` (fatal)
pub fn resolve_path(explicit: Option<&str>) -> AppResult<PathBuf> {
    match explicit {
        Some(p) => {
            let path = expand_tilde(p);
            if file_exists(&path) {
                Ok(path)
            } else {
                Err(AppError::ConfigNotFound(format!(
                    "{}. Please provide a valid config file using --config",
                    path.display()
                )))
            }
        }
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if file_exists(&path) {
                info("Using default config.json that was located in start-up directory.");
                Ok(path)
            } else {
                Err(AppError::Config(
                    "Please provide a config file using --config".to_string(),
                ))
            }
        }
    }
}

pub fn load(explicit: Option<&str>) -> AppResult<RecurringConfig> {
    let path = resolve_path(explicit)?;
    load_from(&path)
}

pub fn load_from(path: &Path) -> AppResult<RecurringConfig> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Strict parse: malformed JSON and schema violations are both errors.
pub fn parse(content: &str) -> AppResult<RecurringConfig> {
    let value: Value = serde_json::from_str(content)?;
    let violations = validate(&value);
    if !violations.is_empty() {
        return Err(AppError::InvalidConfig(violations));
    }
    Ok(serde_json::from_value(value)?)
}

fn describe(v: Option<&Value>) -> String {
    match v {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn violation(actual: Option<&Value>, path: &str, expected: &str) -> String {
    format!(
        "Invalid value {} supplied to {}. Expected a {}",
        describe(actual),
        path,
        expected
    )
}

/// Returns one message per violated field; empty when the document is valid.
pub fn validate(value: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(root) = value.as_object() else {
        errors.push(violation(Some(value), "/", "Config"));
        return errors;
    };

    let entries = root.get("reoccuringEntries");
    let Some(list) = entries.and_then(Value::as_array) else {
        errors.push(violation(entries, "reoccuringEntries", "Array<ReoccuringEntry>"));
        return errors;
    };

    for (i, item) in list.iter().enumerate() {
        let base = format!("reoccuringEntries/{}", i);
        let Some(obj) = item.as_object() else {
            errors.push(violation(Some(item), &base, "ReoccuringEntry"));
            continue;
        };

        let hours = obj.get("hours");
        match hours.and_then(Value::as_f64) {
            Some(h) if h >= 0.0 => {}
            Some(_) => errors.push(violation(hours, &format!("{}/hours", base), "NonNegativeNumber")),
            None => errors.push(violation(hours, &format!("{}/hours", base), "Number")),
        }

        let task_id = obj.get("taskId");
        match task_id {
            Some(v) if v.is_u64() => {}
            Some(v) if v.is_number() => {
                errors.push(violation(task_id, &format!("{}/taskId", base), "Integer"))
            }
            _ => errors.push(violation(task_id, &format!("{}/taskId", base), "Number")),
        }

        let notes = obj.get("notes");
        if !notes.is_some_and(Value::is_string) {
            errors.push(violation(notes, &format!("{}/notes", base), "String"));
        }
    }

    errors
}
