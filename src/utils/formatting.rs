//! Formatting utilities used for CLI outputs.

use crate::models::log_entry::LogEntry;
use crate::utils::colors::{GREY, RESET, color_for_action};
use crate::utils::time::{format_clock_time, format_date};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `Action @ HH:MM:SS (YYYY-MM-DD)`, detail on an indented second line.
pub fn describe_entry(entry: &LogEntry) -> String {
    let ts = Some(entry.time());
    let mut line = format!(
        "{}{}{} {GREY}@ {} ({}){RESET}",
        color_for_action(entry.action()),
        bold(entry.action().as_str()),
        RESET,
        format_clock_time(ts),
        format_date(ts),
    );

    if !entry.detail().is_empty() {
        line.push_str("\n    ");
        line.push_str(entry.detail());
    }

    line
}

/// Message shown when the log view is empty.
pub fn empty_log_message(filter_active: bool) -> &'static str {
    if filter_active {
        "No logs for the chosen dates."
    } else {
        "No logs."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::log_action::LogAction;
    use chrono::{Local, TimeZone, Utc};

    #[test]
    fn test_describe_entry_includes_time_date_and_detail() {
        let ts = Local
            .with_ymd_and_hms(2025, 6, 2, 17, 0, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        let entry = LogEntry::new(ts, LogAction::ClockOut, "Total break time: 00:30:00");

        let text = describe_entry(&entry);
        assert!(text.contains("Clock Out"));
        assert!(text.contains("@ 17:00:00 (2025-06-02)"));
        assert!(text.ends_with("\n    Total break time: 00:30:00"));
    }

    #[test]
    fn test_empty_log_message() {
        assert_eq!(empty_log_message(false), "No logs.");
        assert_eq!(empty_log_message(true), "No logs for the chosen dates.");
    }
}
