use super::log_action::LogAction;
use super::wire_time;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable record of a clock transition.
///
/// Serialized as `{ "time": "<ISO-8601>", "action": "Clock In", "detail": "" }`,
/// the same shape the backend stores and returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(with = "wire_time")]
    time: DateTime<Utc>,
    action: LogAction,
    #[serde(default)]
    detail: String,
}

impl LogEntry {
    pub fn new(time: DateTime<Utc>, action: LogAction, detail: impl Into<String>) -> Self {
        Self {
            time,
            action,
            detail: detail.into(),
        }
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn action(&self) -> LogAction {
        self.action
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}
