use crate::cli::commands::{close_session, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::ui::prompt::confirm;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = &cli.command {
        if !*yes && !confirm("Clear all logs forever?")? {
            messages::info("Nothing cleared.");
            return Ok(());
        }

        let mut session = open_session(cli, cfg)?;
        let status = session.clear_logs()?;
        messages::status(&status);
        close_session(session);
    }
    Ok(())
}
