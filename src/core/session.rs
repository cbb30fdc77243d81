//! Session controller: owns the persisted `AppState` and routes every
//! mutation through mutate → persist → replicate.

use crate::core::clock::{LogMode, Transition};
use crate::core::log_store::read_import;
use crate::core::timer::TimerReadout;
use crate::db::state::StateStore;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat};
use crate::gateway::{Backend, ReplicationQueue};
use crate::models::app_state::AppState;
use crate::models::clock_state::ClockPhase;
use crate::models::log_entry::LogEntry;
use crate::models::log_filter::LogFilter;
use crate::models::status::StatusMessage;
use crate::utils::clock::Clock;
use crate::utils::time::format_filter_bound;
use chrono::{DateTime, TimeDelta, Utc};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct TimeClock {
    state: AppState,
    store: StateStore,
    backend: Arc<dyn Backend>,
    clock: Box<dyn Clock>,
    work_day: TimeDelta,
    replication: ReplicationQueue,
}

impl TimeClock {
    /// Restore the saved state (or start fresh) from `store`.
    pub fn open(
        store: StateStore,
        backend: Arc<dyn Backend>,
        clock: Box<dyn Clock>,
        work_day: TimeDelta,
    ) -> AppResult<Self> {
        let state = store.load()?.unwrap_or_default();

        Ok(Self {
            state,
            store,
            backend,
            clock,
            work_day,
            replication: ReplicationQueue::new(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Status line describing the restored phase.
    pub fn startup_status(&self) -> StatusMessage {
        match self.state.clock.phase() {
            ClockPhase::Out => StatusMessage::info("Ready to clock in."),
            ClockPhase::In => StatusMessage::success("Clocked in."),
            ClockPhase::InOnBreak => StatusMessage::warning("On break."),
        }
    }

    // ---------------------------
    // Transitions
    // ---------------------------

    /// `None` when the transition did not apply (already clocked in).
    pub fn clock_in(&mut self) -> AppResult<Option<StatusMessage>> {
        let now = self.now();
        let transition = self.state.clock.clock_in(now);
        self.commit(
            transition,
            "clock_in",
            StatusMessage::success("Clocked in successfully."),
        )
    }

    pub fn clock_out(&mut self) -> AppResult<Option<StatusMessage>> {
        let now = self.now();
        let transition = self.state.clock.clock_out(now);
        self.commit(
            transition,
            "clock_out",
            StatusMessage::primary("Clocked out. Have a great rest of your day!"),
        )
    }

    pub fn toggle_break(&mut self) -> AppResult<Option<StatusMessage>> {
        let now = self.now();
        let starting = !self.state.clock.is_on_break();
        let transition = self.state.clock.toggle_break(now, LogMode::Emit);

        let (operation, status) = if starting {
            ("break_start", StatusMessage::warning("Break started."))
        } else {
            ("break_end", StatusMessage::success("Break ended."))
        };
        self.commit(transition, operation, status)
    }

    fn commit(
        &mut self,
        transition: Transition,
        operation: &str,
        status: StatusMessage,
    ) -> AppResult<Option<StatusMessage>> {
        match transition {
            Transition::Ignored => {
                debug!(operation, "transition ignored in current phase");
                Ok(None)
            }
            Transition::Silent => {
                self.persist()?;
                self.audit(operation, "", "");
                Ok(Some(status))
            }
            Transition::Logged(entry) => {
                let action = entry.action();
                let detail = entry.detail().to_string();
                self.append(entry)?;
                self.audit(action.audit_op(), action.as_str(), &detail);
                Ok(Some(status))
            }
        }
    }

    // ---------------------------
    // Log store
    // ---------------------------

    /// Prepend, persist, then replicate to the backend in the background.
    pub fn append(&mut self, entry: LogEntry) -> AppResult<()> {
        self.state.logs.append(entry.clone());
        self.persist()?;

        let backend = Arc::clone(&self.backend);
        self.replication
            .dispatch("append", move || backend.append_log(&entry));
        Ok(())
    }

    pub fn clear_logs(&mut self) -> AppResult<StatusMessage> {
        self.state.logs.clear();
        self.persist()?;
        self.audit("clear", "logs", "All logs cleared");

        // pending appends must reach the backend before its clear
        self.replication.drain();
        let backend = Arc::clone(&self.backend);
        self.replication.dispatch("clear", move || backend.clear_logs());

        Ok(StatusMessage::danger("Logs cleared."))
    }

    pub fn replace_logs(&mut self, logs: Vec<LogEntry>) -> AppResult<()> {
        self.state.logs.replace(logs);
        self.persist()
    }

    /// The log view with the persisted filter applied.
    pub fn visible_logs(&self) -> Vec<LogEntry> {
        self.state.logs.filtered(&self.state.log_filter)
    }

    pub fn filter(&self) -> &LogFilter {
        &self.state.log_filter
    }

    pub fn set_filter(&mut self, filter: LogFilter) -> AppResult<()> {
        self.state.log_filter = filter;
        self.persist()?;
        self.audit(
            "filter",
            "set",
            &format!(
                "from {} to {}",
                format_filter_bound(filter.from),
                format_filter_bound(filter.to)
            ),
        );
        Ok(())
    }

    pub fn clear_filter(&mut self) -> AppResult<()> {
        self.state.log_filter = LogFilter::default();
        self.persist()?;
        self.audit("filter", "clear", "Filter cleared");
        Ok(())
    }

    // ---------------------------
    // Timers
    // ---------------------------

    pub fn timers(&self) -> TimerReadout {
        TimerReadout::compute(&self.state.clock, self.now(), self.work_day)
    }

    // ---------------------------
    // Backend round-trips
    // ---------------------------

    /// Replace the local log with the backend's. Backend failures leave the
    /// local log untouched and come back as a danger status.
    pub fn fetch_from_backend(&mut self) -> AppResult<StatusMessage> {
        match self.backend.fetch_logs() {
            Ok(logs) => {
                let count = logs.len();
                self.replace_logs(logs)?;
                self.audit("sync", "backend", &format!("Loaded {count} entries"));
                Ok(StatusMessage::info("Logs loaded from backend."))
            }
            Err(e) => {
                warn!(error = %e, "failed to load logs from backend");
                Ok(StatusMessage::danger("Failed to load logs from backend."))
            }
        }
    }

    /// Push the entries of a JSON file to the backend, then re-fetch.
    /// An unreadable or malformed file aborts before anything changes.
    pub fn import_file(&mut self, path: &Path) -> AppResult<StatusMessage> {
        let logs = read_import(path)?;

        if let Err(e) = self.backend.import_logs(&logs) {
            warn!(error = %e, "backend import failed");
            return Ok(StatusMessage::danger("Backend import failed."));
        }
        self.audit(
            "import",
            &path.display().to_string(),
            &format!("Imported {} entries", logs.len()),
        );

        let fetched = self.fetch_from_backend()?;
        if fetched.is_danger() {
            return Ok(fetched);
        }
        Ok(StatusMessage::info("Logs imported and written to backend."))
    }

    /// Download the backend CSV for the current filter into `path`.
    pub fn export_from_backend(&self, path: &Path) -> AppResult<StatusMessage> {
        match self.backend.export_csv(&self.state.log_filter) {
            Ok(body) => {
                export::save_backend_csv(path, &body)?;
                self.audit("export", &path.display().to_string(), "Backend CSV export");
                Ok(StatusMessage::info("Logs exported from backend."))
            }
            Err(e) => {
                warn!(error = %e, "failed to export logs from backend");
                Ok(StatusMessage::danger("Failed to export logs from backend."))
            }
        }
    }

    /// Write the filtered local view without involving the backend.
    pub fn export_local(&self, path: &Path, format: ExportFormat) -> AppResult<()> {
        let logs = self.visible_logs();
        match format {
            ExportFormat::Csv => export::export_csv(&logs, path)?,
            ExportFormat::Json => export::export_json(&logs, path)?,
        }
        self.audit(
            "export",
            &path.display().to_string(),
            &format!("Local {} export of {} entries", format.as_str(), logs.len()),
        );
        Ok(())
    }

    /// Wait for in-flight best-effort calls. Returns the number that failed.
    pub fn finish(mut self) -> usize {
        self.replication.drain()
    }

    fn persist(&self) -> AppResult<()> {
        self.store.save(&self.state)
    }

    /// The audit trail never blocks an operation.
    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.store.audit(operation, target, message) {
            warn!(operation, error = %e, "failed to write internal log");
        }
    }
}
