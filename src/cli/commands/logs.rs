use crate::cli::commands::{close_session, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::session::TimeClock;
use crate::errors::AppResult;
use crate::models::log_entry::LogEntry;
use crate::ui::messages;
use crate::utils::formatting::{describe_entry, empty_log_message};
use crate::utils::time::format_filter_bound;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Logs { all } = &cli.command {
        let session = open_session(cli, cfg)?;
        print_logs(&session, *all);
        close_session(session);
    }
    Ok(())
}

/// Print the log view, newest first. `all` bypasses the saved filter.
pub fn print_logs(session: &TimeClock, all: bool) {
    let filter = session.filter();
    let apply_filter = !all && !filter.is_empty();

    let logs: Vec<LogEntry> = if all {
        session.state().logs.entries().to_vec()
    } else {
        session.visible_logs()
    };

    if apply_filter {
        messages::header(format!(
            "Logs from {} to {}",
            format_filter_bound(filter.from),
            format_filter_bound(filter.to)
        ));
    } else {
        messages::header("Logs");
    }

    if logs.is_empty() {
        println!("{}", empty_log_message(apply_filter));
        return;
    }

    for entry in &logs {
        println!("{}", describe_entry(entry));
    }
}
