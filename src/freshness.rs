//! Last-modification dates for discovered files.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// Read a file's modification timestamp as a `YYYY-MM-DD` date (UTC)
///
/// Propagates an I/O error if the file is inaccessible or was removed between
/// discovery and read; a bad file aborts the whole run.
pub fn last_modified(path: &Path) -> Result<String> {
    let mtime = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| Error::metadata(path, e))?;

    let date: DateTime<Utc> = mtime.into();
    Ok(date.format("%Y-%m-%d").to_string())
}
