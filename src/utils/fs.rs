//! Small file helpers for the JSON documents kept on disk.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Remove a file. A file that is already gone counts as removed.
pub fn delete_file(path: &Path) -> AppResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AppError::Io(e)),
    }
}

/// Serialize `data` as compact JSON, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(data)?;
    fs::write(path, json)?;
    Ok(())
}
