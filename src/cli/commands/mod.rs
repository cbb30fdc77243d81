pub mod audit;
pub mod clear;
pub mod clock;
pub mod config;
pub mod export;
pub mod filter;
pub mod import;
pub mod init;
pub mod logs;
pub mod status;
pub mod sync;
pub mod watch;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::TimeClock;
use crate::db::state::StateStore;
use crate::errors::AppResult;
use crate::gateway::Backend;
use crate::gateway::http::HttpBackend;
use crate::gateway::offline::OfflineBackend;
use crate::utils::clock::SystemClock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Open the saved session with the backend selected by config and flags.
pub fn open_session(cli: &Cli, cfg: &Config) -> AppResult<TimeClock> {
    let backend: Arc<dyn Backend> = if cli.offline {
        debug!("offline mode, backend calls disabled");
        Arc::new(OfflineBackend)
    } else {
        Arc::new(HttpBackend::new(&cfg.backend_url, cfg.request_timeout())?)
    };

    let store = StateStore::open(&cfg.database_path())?;
    TimeClock::open(
        store,
        backend,
        Box::new(SystemClock),
        cfg.work_day_duration()?,
    )
}

/// Wait for background backend calls before the process exits.
pub fn close_session(session: TimeClock) {
    let failed = session.finish();
    if failed > 0 {
        warn!(failed, "some changes were not replicated to the backend");
    }
}
