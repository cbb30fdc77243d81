#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use rtimeclock::core::session::TimeClock;
use rtimeclock::db::state::StateStore;
use rtimeclock::errors::{AppError, AppResult};
use rtimeclock::gateway::Backend;
use rtimeclock::models::log_entry::LogEntry;
use rtimeclock::models::log_filter::LogFilter;
use rtimeclock::utils::clock::Clock;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Binary under test, with HOME pointed at `home` so no real config is read.
pub fn rtc(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimeclock");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Fresh temp dir plus a database path inside it.
pub fn setup_test_db() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("temp dir");
    let db = dir.path().join("rtimeclock.sqlite");
    (dir, db.to_string_lossy().to_string())
}

pub fn temp_out(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap()
}

/// Clock that only moves when told to.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(start)))
    }

    pub fn advance(&self, seconds: i64) {
        let mut now = self.0.lock().unwrap();
        *now += TimeDelta::seconds(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// In-memory backend recording every call.
#[derive(Default)]
pub struct FakeBackend {
    pub remote: Mutex<Vec<LogEntry>>,
    pub appended: Mutex<Vec<LogEntry>>,
    pub imported: Mutex<Vec<LogEntry>>,
    pub clears: Mutex<usize>,
    pub export_filters: Mutex<Vec<LogFilter>>,
    pub failing: Mutex<bool>,
}

impl FakeBackend {
    pub fn with_remote(logs: Vec<LogEntry>) -> Self {
        let fake = Self::default();
        *fake.remote.lock().unwrap() = logs;
        fake
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    fn check(&self) -> AppResult<()> {
        if *self.failing.lock().unwrap() {
            Err(AppError::Backend {
                status: 500,
                url: "http://fake/".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl Backend for FakeBackend {
    fn fetch_logs(&self) -> AppResult<Vec<LogEntry>> {
        self.check()?;
        Ok(self.remote.lock().unwrap().clone())
    }

    fn append_log(&self, entry: &LogEntry) -> AppResult<()> {
        self.check()?;
        self.appended.lock().unwrap().push(entry.clone());
        self.remote.lock().unwrap().insert(0, entry.clone());
        Ok(())
    }

    fn clear_logs(&self) -> AppResult<()> {
        self.check()?;
        *self.clears.lock().unwrap() += 1;
        self.remote.lock().unwrap().clear();
        Ok(())
    }

    fn import_logs(&self, logs: &[LogEntry]) -> AppResult<()> {
        self.check()?;
        *self.imported.lock().unwrap() = logs.to_vec();
        *self.remote.lock().unwrap() = logs.to_vec();
        Ok(())
    }

    fn export_csv(&self, filter: &LogFilter) -> AppResult<String> {
        self.check()?;
        self.export_filters.lock().unwrap().push(*filter);
        Ok("ID,Action,Time\n1,Clock In,2025-06-02 08:00:00\n".to_string())
    }
}

/// Session on an in-memory store with a manual clock at `t0()` and an 8h day.
pub fn session_with(backend: Arc<FakeBackend>) -> (TimeClock, ManualClock) {
    let clock = ManualClock::new(t0());
    let store = StateStore::in_memory().expect("in-memory store");
    let session = TimeClock::open(
        store,
        backend,
        Box::new(clock.clone()),
        TimeDelta::hours(8),
    )
    .expect("open session");
    (session, clock)
}

pub fn session_on_file(path: &str, clock: &ManualClock, backend: Arc<FakeBackend>) -> TimeClock {
    let store = StateStore::open(path).expect("open store");
    TimeClock::open(
        store,
        backend,
        Box::new(clock.clone()),
        TimeDelta::hours(8),
    )
    .expect("open session")
}
