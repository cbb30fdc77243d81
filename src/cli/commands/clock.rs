use crate::cli::commands::{close_session, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::time::format_clock_time;

/// Handle `in`, `out` and `break`.
///
/// A transition that does not apply in the current phase prints nothing.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cli, cfg)?;

    let outcome = match &cli.command {
        Commands::In => session.clock_in()?,
        Commands::Out => session.clock_out()?,
        Commands::Break => session.toggle_break()?,
        _ => None,
    };

    if let Some(status) = outcome {
        messages::status(&status);

        if let Some(entry) = session.state().logs.entries().first() {
            println!(
                "   {} at {}",
                entry.action(),
                format_clock_time(Some(entry.time()))
            );
            if !entry.detail().is_empty() {
                println!("   {}", entry.detail());
            }
        }
    }

    close_session(session);
    Ok(())
}
