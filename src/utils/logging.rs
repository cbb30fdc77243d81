//! Diagnostic logging (stderr). User-facing output goes through
//! `ui::messages`; the audit trail goes to the `log` table.

use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Overrides the configured level, e.g. `RTIMECLOCK_LOG=debug`.
pub const LOG_ENV: &str = "RTIMECLOCK_LOG";

pub fn enable_logging(level: &str) -> AppResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace('-', "_")
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Other(format!("Failed to initialise logging: {e}")))
}
