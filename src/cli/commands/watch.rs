use crate::cli::commands::{close_session, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

/// Redraw the break and remaining timers once per second on a single line.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { ticks } = &cli.command {
        let session = open_session(cli, cfg)?;
        messages::status(&session.startup_status());

        let mut out = io::stdout();
        let mut done: u64 = 0;

        loop {
            let timers = session.timers();
            write!(
                out,
                "\rBreak {}   Remaining {}",
                timers.break_display(),
                timers.remaining_display()
            )?;
            out.flush()?;

            done += 1;
            if ticks.is_some_and(|limit| done >= limit) {
                break;
            }
            thread::sleep(TICK);
        }
        writeln!(out)?;

        close_session(session);
    }
    Ok(())
}
