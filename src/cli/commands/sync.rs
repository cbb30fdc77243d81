use crate::cli::commands::{close_session, open_session};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `sync` command: the backend's log replaces the local one.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cli, cfg)?;
    let status = session.fetch_from_backend()?;
    messages::status(&status);
    close_session(session);
    Ok(())
}
