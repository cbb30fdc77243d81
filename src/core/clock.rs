//! Clock/break state machine.
//!
//! `Out --clock_in--> In --toggle_break--> InOnBreak --toggle_break--> In`
//! and `In | InOnBreak --clock_out--> Out`. Calls outside those edges are
//! ignored, never errors.

use crate::models::clock_state::ClockState;
use crate::models::log_action::LogAction;
use crate::models::log_entry::LogEntry;
use crate::utils::time::{format_duration, whole_seconds_between};
use chrono::{DateTime, Utc};

/// Whether a break toggle records a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Emit,
    Suppressed,
}

/// Result of applying a transition to a `ClockState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Precondition not met; state untouched.
    Ignored,
    /// State changed without a log entry.
    Silent,
    /// State changed and this entry must be appended to the log.
    Logged(LogEntry),
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored)
    }

    pub fn entry(&self) -> Option<&LogEntry> {
        match self {
            Transition::Logged(entry) => Some(entry),
            _ => None,
        }
    }
}

impl ClockState {
    pub fn clock_in(&mut self, now: DateTime<Utc>) -> Transition {
        if self.is_clocked_in {
            return Transition::Ignored;
        }

        self.is_clocked_in = true;
        self.is_on_break = false;
        self.clock_in_time = Some(now);
        self.clock_out_time = None;
        self.break_start_time = None;
        self.total_break_seconds = 0;

        Transition::Logged(LogEntry::new(now, LogAction::ClockIn, ""))
    }

    /// Ends the session. A running break is closed first without its own
    /// log entry, so its seconds are part of the reported total.
    pub fn clock_out(&mut self, now: DateTime<Utc>) -> Transition {
        if !self.is_clocked_in {
            return Transition::Ignored;
        }

        if self.is_on_break {
            self.toggle_break(now, LogMode::Suppressed);
        }

        self.is_clocked_in = false;
        self.clock_in_time = None;
        self.clock_out_time = Some(now);

        Transition::Logged(LogEntry::new(
            now,
            LogAction::ClockOut,
            format!(
                "Total break time: {}",
                format_duration(self.total_break_seconds)
            ),
        ))
    }

    pub fn toggle_break(&mut self, now: DateTime<Utc>, mode: LogMode) -> Transition {
        if !self.is_clocked_in {
            return Transition::Ignored;
        }

        let entry = if self.is_on_break {
            let elapsed = self
                .break_start_time
                .map(|start| whole_seconds_between(start, now))
                .unwrap_or(0);

            self.total_break_seconds += elapsed;
            self.is_on_break = false;
            self.break_start_time = None;

            LogEntry::new(
                now,
                LogAction::BreakEnd,
                format!("Break duration: {}", format_duration(elapsed)),
            )
        } else {
            self.is_on_break = true;
            self.break_start_time = Some(now);

            LogEntry::new(now, LogAction::BreakStart, "")
        };

        match mode {
            LogMode::Emit => Transition::Logged(entry),
            LogMode::Suppressed => Transition::Silent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clock_state::ClockPhase;
    use chrono::{TimeDelta, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        t0() + TimeDelta::seconds(secs)
    }

    fn assert_invariants(s: &ClockState) {
        assert!(!s.is_on_break || s.is_clocked_in);
        assert_eq!(s.break_start_time.is_some(), s.is_on_break);
        assert_eq!(s.clock_in_time.is_some(), s.is_clocked_in);
        assert!(s.total_break_seconds >= 0);
    }

    #[test]
    fn test_clock_in_then_out() {
        let mut s = ClockState::default();

        let t_in = s.clock_in(at(0));
        assert_eq!(t_in.entry().map(|e| e.action()), Some(LogAction::ClockIn));
        assert_eq!(s.phase(), ClockPhase::In);
        assert_invariants(&s);

        let t_out = s.clock_out(at(60));
        let entry = t_out.entry().unwrap();
        assert_eq!(entry.action(), LogAction::ClockOut);
        assert_eq!(entry.detail(), "Total break time: 00:00:00");
        assert!(!s.is_clocked_in());
        assert_eq!(s.clock_out_time(), Some(at(60)));
        assert_invariants(&s);
    }

    #[test]
    fn test_clock_in_twice_is_ignored() {
        let mut s = ClockState::default();
        s.clock_in(at(0));
        let before = s.clone();

        assert!(s.clock_in(at(30)).is_ignored());
        assert_eq!(s, before);
    }

    #[test]
    fn test_clock_in_resets_previous_session() {
        let mut s = ClockState::default();
        s.clock_in(at(0));
        s.toggle_break(at(10), LogMode::Emit);
        s.toggle_break(at(70), LogMode::Emit);
        s.clock_out(at(100));
        assert_eq!(s.total_break_seconds(), 60);

        s.clock_in(at(200));
        assert_eq!(s.total_break_seconds(), 0);
        assert_eq!(s.clock_out_time(), None);
        assert_eq!(s.clock_in_time(), Some(at(200)));
    }

    #[test]
    fn test_out_and_break_ignored_when_clocked_out() {
        let mut s = ClockState::default();
        assert!(s.clock_out(at(0)).is_ignored());
        assert!(s.toggle_break(at(0), LogMode::Emit).is_ignored());
        assert_eq!(s, ClockState::default());
    }

    #[test]
    fn test_breaks_accumulate_completed_intervals() {
        let mut s = ClockState::default();
        s.clock_in(at(0));

        let intervals = [(100, 160), (300, 301), (500, 1400)];
        let mut expected = 0;
        for (start, end) in intervals {
            let started = s.toggle_break(at(start), LogMode::Emit);
            assert_eq!(
                started.entry().map(|e| e.action()),
                Some(LogAction::BreakStart)
            );
            assert_invariants(&s);

            let ended = s.toggle_break(at(end), LogMode::Emit);
            expected += end - start;
            assert_eq!(
                ended.entry().unwrap().detail(),
                format!("Break duration: {}", format_duration(end - start))
            );
            assert_eq!(s.total_break_seconds(), expected);
            assert_invariants(&s);
        }
    }

    #[test]
    fn test_break_end_counts_whole_seconds() {
        let mut s = ClockState::default();
        s.clock_in(at(0));
        s.toggle_break(at(10), LogMode::Emit);
        s.toggle_break(at(10) + TimeDelta::milliseconds(2_999), LogMode::Emit);
        assert_eq!(s.total_break_seconds(), 2);
    }

    #[test]
    fn test_clock_out_on_break_closes_break_silently() {
        let mut s = ClockState::default();
        s.clock_in(at(0));
        s.toggle_break(at(100), LogMode::Emit);
        s.toggle_break(at(130), LogMode::Emit);
        s.toggle_break(at(1000), LogMode::Emit);

        let out = s.clock_out(at(1300));
        let entry = out.entry().unwrap();
        assert_eq!(entry.action(), LogAction::ClockOut);
        assert_eq!(s.total_break_seconds(), 30 + 300);
        assert_eq!(entry.detail(), "Total break time: 00:05:30");
        assert!(!s.is_on_break());
        assert_invariants(&s);
    }

    #[test]
    fn test_suppressed_toggle_is_silent() {
        let mut s = ClockState::default();
        s.clock_in(at(0));
        assert_eq!(s.toggle_break(at(5), LogMode::Suppressed), Transition::Silent);
        assert!(s.is_on_break());
        assert_eq!(s.toggle_break(at(9), LogMode::Suppressed), Transition::Silent);
        assert_eq!(s.total_break_seconds(), 4);
    }
}
