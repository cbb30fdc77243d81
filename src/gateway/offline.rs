use super::Backend;
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;
use crate::models::log_filter::LogFilter;

/// Backend used with `--offline`: every call fails with `AppError::Offline`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineBackend;

impl Backend for OfflineBackend {
    fn fetch_logs(&self) -> AppResult<Vec<LogEntry>> {
        Err(AppError::Offline)
    }

    fn append_log(&self, _entry: &LogEntry) -> AppResult<()> {
        Err(AppError::Offline)
    }

    fn clear_logs(&self) -> AppResult<()> {
        Err(AppError::Offline)
    }

    fn import_logs(&self, _logs: &[LogEntry]) -> AppResult<()> {
        Err(AppError::Offline)
    }

    fn export_csv(&self, _filter: &LogFilter) -> AppResult<String> {
        Err(AppError::Offline)
    }
}
