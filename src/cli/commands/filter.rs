use crate::cli::commands::{close_session, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::log_filter::LogFilter;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::{Bound, format_filter_bound, parse_filter_bound};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Filter {
        from,
        to,
        clear,
        ..
    } = &cli.command
    {
        // parse before touching the database
        let from = from
            .as_deref()
            .map(|s| parse_filter_bound(s, Bound::Start))
            .transpose()?;
        let to = to
            .as_deref()
            .map(|s| parse_filter_bound(s, Bound::End))
            .transpose()?;

        let mut session = open_session(cli, cfg)?;

        if *clear {
            session.clear_filter()?;
            success("Filter cleared.");
        } else if from.is_some() || to.is_some() {
            let filter = LogFilter::new(from, to);
            if let (Some(f), Some(t)) = (filter.from, filter.to)
                && f > t
            {
                warning("The lower bound is after the upper bound: no entry will match.");
            }
            session.set_filter(filter)?;
            success(format!(
                "Filter set: from {} to {}",
                format_filter_bound(filter.from),
                format_filter_bound(filter.to)
            ));
        } else {
            // `--show`, or no flag at all
            let current = *session.filter();
            if current.is_empty() {
                info("No filter set.");
            } else {
                info(format!(
                    "Filter: from {} to {}",
                    format_filter_bound(current.from),
                    format_filter_bound(current.to)
                ));
            }
        }

        close_session(session);
    }
    Ok(())
}
