use super::wire_time;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse phase derived from the clock flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPhase {
    Out,
    In,
    InOnBreak,
}

/// Clock and break bookkeeping for the current session.
///
/// Invariants (kept by the transitions in `core::clock`):
/// - `is_on_break` implies `is_clocked_in`
/// - `break_start_time` is set iff `is_on_break`
/// - `clock_in_time` is set iff `is_clocked_in`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClockState {
    pub(crate) is_clocked_in: bool,
    pub(crate) is_on_break: bool,
    #[serde(with = "wire_time::option")]
    pub(crate) clock_in_time: Option<DateTime<Utc>>,
    #[serde(with = "wire_time::option")]
    pub(crate) clock_out_time: Option<DateTime<Utc>>,
    #[serde(with = "wire_time::option")]
    pub(crate) break_start_time: Option<DateTime<Utc>>,
    pub(crate) total_break_seconds: i64,
}

impl ClockState {
    pub fn phase(&self) -> ClockPhase {
        match (self.is_clocked_in, self.is_on_break) {
            (false, _) => ClockPhase::Out,
            (true, false) => ClockPhase::In,
            (true, true) => ClockPhase::InOnBreak,
        }
    }

    pub fn is_clocked_in(&self) -> bool {
        self.is_clocked_in
    }

    pub fn is_on_break(&self) -> bool {
        self.is_on_break
    }

    pub fn clock_in_time(&self) -> Option<DateTime<Utc>> {
        self.clock_in_time
    }

    pub fn clock_out_time(&self) -> Option<DateTime<Utc>> {
        self.clock_out_time
    }

    pub fn break_start_time(&self) -> Option<DateTime<Utc>> {
        self.break_start_time
    }

    pub fn total_break_seconds(&self) -> i64 {
        self.total_break_seconds
    }
}
