//! Derived timers, recomputed on every tick.

use crate::models::clock_state::ClockState;
use crate::utils::time::{PLACEHOLDER, format_duration, whole_seconds_between};
use chrono::{DateTime, TimeDelta, Utc};

/// Default length of a work day.
pub const WORK_DAY_SECONDS: i64 = 8 * 60 * 60;

/// Accumulated break time plus the running break, if any.
pub fn current_break_seconds(state: &ClockState, now: DateTime<Utc>) -> i64 {
    let running = match (state.is_on_break(), state.break_start_time()) {
        (true, Some(start)) => whole_seconds_between(start, now),
        _ => 0,
    };
    state.total_break_seconds() + running
}

/// Work time left in the day, floored at zero. `None` while clocked out.
pub fn remaining_work_seconds(
    state: &ClockState,
    now: DateTime<Utc>,
    work_day: TimeDelta,
) -> Option<i64> {
    if !state.is_clocked_in() {
        return None;
    }
    let clock_in = state.clock_in_time()?;

    let elapsed = whole_seconds_between(clock_in, now);
    let worked = elapsed - current_break_seconds(state, now);

    Some((work_day.num_seconds() - worked).max(0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerReadout {
    pub break_seconds: i64,
    pub remaining_seconds: Option<i64>,
}

impl TimerReadout {
    pub fn compute(state: &ClockState, now: DateTime<Utc>, work_day: TimeDelta) -> Self {
        Self {
            break_seconds: current_break_seconds(state, now),
            remaining_seconds: remaining_work_seconds(state, now, work_day),
        }
    }

    pub fn break_display(&self) -> String {
        format_duration(self.break_seconds)
    }

    pub fn remaining_display(&self) -> String {
        self.remaining_seconds
            .map(format_duration)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}
