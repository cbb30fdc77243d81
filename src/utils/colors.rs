/// ANSI color helper utilities for terminal output.
use crate::models::log_action::LogAction;
use crate::utils::time::PLACEHOLDER;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_action(action: LogAction) -> &'static str {
    match action {
        LogAction::ClockIn => GREEN,
        LogAction::ClockOut => RED,
        LogAction::BreakStart => YELLOW,
        LogAction::BreakEnd => CYAN,
    }
}

/// Grey out empty timer/time fields ("--:--:--" or "").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == PLACEHOLDER {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
