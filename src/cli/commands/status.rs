use crate::cli::commands::logs::print_logs;
use crate::cli::commands::{close_session, open_session};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::colors::colorize_optional;
use crate::utils::time::format_clock_time;

/// Handle the `status` command: phase, clock-in time, timers and the log view.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = open_session(cli, cfg)?;
    let clock = &session.state().clock;
    let timers = session.timers();

    messages::status(&session.startup_status());
    println!();
    println!(
        "Clock in : {}",
        colorize_optional(&format_clock_time(clock.clock_in_time()))
    );
    println!("Break    : {}", timers.break_display());
    println!("Remaining: {}", colorize_optional(&timers.remaining_display()));
    println!();

    print_logs(&session, false);

    close_session(session);
    Ok(())
}
