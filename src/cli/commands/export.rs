use crate::cli::commands::{close_session, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{DEFAULT_EXPORT_FILE, DEFAULT_JSON_EXPORT_FILE, ExportFormat, ensure_writable};
use crate::ui::messages;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        local,
        format,
        force,
    } = &cli.command
    {
        let default_file = if *local && *format == ExportFormat::Json {
            DEFAULT_JSON_EXPORT_FILE
        } else {
            DEFAULT_EXPORT_FILE
        };
        let path = expand_tilde(file.as_deref().unwrap_or(default_file));
        ensure_writable(&path, *force)?;

        let session = open_session(cli, cfg)?;

        if *local {
            session.export_local(&path, *format)?;
        } else {
            let status = session.export_from_backend(&path)?;
            messages::status(&status);
        }

        close_session(session);
    }
    Ok(())
}
