// src/export/mod.rs

mod fs_utils;
mod json_csv;

pub use fs_utils::ensure_writable;
pub use json_csv::{export_csv, export_json};

use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use clap::ValueEnum;
use std::fs;
use std::path::Path;

/// Default file name of a backend CSV export.
pub const DEFAULT_EXPORT_FILE: &str = "clocklogs.csv";
/// Default file name of a local JSON export.
pub const DEFAULT_JSON_EXPORT_FILE: &str = "clocklogs.json";

/// Completion line shared by every exporter.
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

/// Write the CSV body returned by the backend verbatim.
pub fn save_backend_csv(path: &Path, body: &str) -> AppResult<()> {
    info(format!("Saving backend export to: {}", path.display()));

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, body)?;

    notify_export_success("Backend CSV", path);
    Ok(())
}
