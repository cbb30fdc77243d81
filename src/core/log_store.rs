//! Rolling, newest-first log of clock events.

use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;
use crate::models::log_filter::LogFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of entries kept; older ones are dropped on append.
pub const MAX_LOG_ENTRIES: usize = 20;

const INVALID_FORMAT: &str = "Failed to load file: Invalid format";
const NOT_AN_ARRAY: &str = "File does not contain valid logs array.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogStore(Vec<LogEntry>);

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `entry` and keep only the `MAX_LOG_ENTRIES` most recent.
    pub fn append(&mut self, entry: LogEntry) {
        self.0.insert(0, entry);
        self.0.truncate(MAX_LOG_ENTRIES);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Wholesale replacement: no merge, no dedup.
    pub fn replace(&mut self, entries: Vec<LogEntry>) {
        self.0 = entries;
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn filtered(&self, filter: &LogFilter) -> Vec<LogEntry> {
        filter_logs(&self.0, filter)
    }
}

/// Entries inside the inclusive range of `filter`, input order kept.
pub fn filter_logs(logs: &[LogEntry], filter: &LogFilter) -> Vec<LogEntry> {
    if filter.is_empty() {
        return logs.to_vec();
    }
    logs.iter().filter(|e| filter.matches(e)).cloned().collect()
}

/// Read and parse a log import file. A file that cannot be read or is not
/// UTF-8 fails like malformed JSON.
pub fn read_import(path: &Path) -> AppResult<Vec<LogEntry>> {
    let bytes = fs::read(path).map_err(|_| AppError::InvalidImport(INVALID_FORMAT.to_string()))?;
    let content = String::from_utf8(bytes)
        .map_err(|_| AppError::InvalidImport(INVALID_FORMAT.to_string()))?;
    parse_import(&content)
}

/// Parse the content of a log import file (a JSON array of entries).
pub fn parse_import(content: &str) -> AppResult<Vec<LogEntry>> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|_| AppError::InvalidImport(INVALID_FORMAT.to_string()))?;

    if !value.is_array() {
        return Err(AppError::InvalidImport(NOT_AN_ARRAY.to_string()));
    }

    serde_json::from_value(value).map_err(|_| AppError::InvalidImport(INVALID_FORMAT.to_string()))
}
