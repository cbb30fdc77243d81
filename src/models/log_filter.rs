use super::log_entry::LogEntry;
use super::wire_time;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive time range applied to the log view. Unset bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogFilter {
    #[serde(with = "wire_time::option")]
    pub from: Option<DateTime<Utc>>,
    #[serde(with = "wire_time::option")]
    pub to: Option<DateTime<Utc>>,
}

impl LogFilter {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        let t = entry.time();
        self.from.is_none_or(|from| t >= from) && self.to.is_none_or(|to| t <= to)
    }
}
