use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// Kind of state transition recorded in the time log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogAction {
    ClockIn,
    ClockOut,
    BreakStart,
    BreakEnd,
}

impl LogAction {
    /// Wire/display name, shared with the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogAction::ClockIn => "Clock In",
            LogAction::ClockOut => "Clock Out",
            LogAction::BreakStart => "Break Start",
            LogAction::BreakEnd => "Break End",
        }
    }

    /// Accepts the wire name (`Clock In`) and the compact one (`ClockIn`).
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim() {
            "Clock In" | "ClockIn" => Some(LogAction::ClockIn),
            "Clock Out" | "ClockOut" => Some(LogAction::ClockOut),
            "Break Start" | "BreakStart" => Some(LogAction::BreakStart),
            "Break End" | "BreakEnd" => Some(LogAction::BreakEnd),
            _ => None,
        }
    }

    /// Operation name used in the internal audit log.
    pub fn audit_op(&self) -> &'static str {
        match self {
            LogAction::ClockIn => "clock_in",
            LogAction::ClockOut => "clock_out",
            LogAction::BreakStart => "break_start",
            LogAction::BreakEnd => "break_end",
        }
    }
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LogAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LogAction::from_wire(&raw)
            .ok_or_else(|| de::Error::custom(format!("unknown log action '{raw}'")))
    }
}
