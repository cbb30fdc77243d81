use crate::config::Config;
use crate::core::audit::AuditLogic;
use crate::db::state::StateStore;
use crate::errors::AppResult;

/// Print the internal log table. No session needed: the backend is not involved.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = StateStore::open(&cfg.database_path())?;
    AuditLogic::print_audit(&store)
}
