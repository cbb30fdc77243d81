//! Remote side of persistence: the backend contract and the fire-and-forget
//! queue used for best-effort calls.

pub mod http;
pub mod offline;

use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;
use crate::models::log_filter::LogFilter;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

pub const LOGS_ENDPOINT: &str = "/api/logs";
pub const LOGS_CLEAR_ENDPOINT: &str = "/api/logs/clear";
pub const LOGS_IMPORT_ENDPOINT: &str = "/api/logs/import";
pub const LOGS_EXPORT_ENDPOINT: &str = "/api/logs/export";

/// REST-like log backend. Local state stays authoritative: callers decide
/// which failures matter.
pub trait Backend: Send + Sync {
    /// `GET /api/logs`
    fn fetch_logs(&self) -> AppResult<Vec<LogEntry>>;

    /// `POST /api/logs`
    fn append_log(&self, entry: &LogEntry) -> AppResult<()>;

    /// `POST /api/logs/clear`
    fn clear_logs(&self) -> AppResult<()>;

    /// `POST /api/logs/import`
    fn import_logs(&self, logs: &[LogEntry]) -> AppResult<()>;

    /// `GET /api/logs/export?from=..&to=..`, returns the CSV body.
    fn export_csv(&self, filter: &LogFilter) -> AppResult<String>;
}

type Job = JoinHandle<AppResult<()>>;

/// Background jobs whose outcome never feeds back into local state.
///
/// Jobs start immediately; `drain` only waits so the process does not exit
/// while a request is in flight. Failures are logged and counted.
#[derive(Default)]
pub struct ReplicationQueue {
    pending: Vec<(&'static str, Job)>,
}

impl ReplicationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch<F>(&mut self, label: &'static str, job: F)
    where
        F: FnOnce() -> AppResult<()> + Send + 'static,
    {
        let spawned = thread::Builder::new()
            .name(format!("replicate-{label}"))
            .spawn(job);

        match spawned {
            Ok(handle) => self.pending.push((label, handle)),
            Err(e) => warn!(job = label, error = %e, "could not start replication job"),
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Wait for every dispatched job. Returns how many failed.
    pub fn drain(&mut self) -> usize {
        let mut failures = 0;

        for (label, handle) in self.pending.drain(..) {
            let outcome = handle
                .join()
                .unwrap_or_else(|_| Err(AppError::Other(format!("{label} job panicked"))));

            match outcome {
                Ok(()) => debug!(job = label, "replicated to backend"),
                Err(AppError::Offline) => debug!(job = label, "skipped, backend offline"),
                Err(e) => {
                    failures += 1;
                    warn!(job = label, error = %e, "best-effort backend call failed");
                }
            }
        }

        failures
    }
}

impl Drop for ReplicationQueue {
    fn drop(&mut self) {
        self.drain();
    }
}
