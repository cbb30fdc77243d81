use crate::cli::commands::{close_session, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = &cli.command {
        let path = expand_tilde(file);
        let mut session = open_session(cli, cfg)?;

        messages::info(format!("Importing logs from {}", path.display()));
        let status = session.import_file(&path)?;
        messages::status(&status);

        close_session(session);
    }
    Ok(())
}
