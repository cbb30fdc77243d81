use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::state::StateStore;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rTimeclock…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_path);

    let store = StateStore::open(&db_path)?;

    if let Err(e) = store.audit(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path),
    ) {
        messages::warning(format!("Failed to write internal log: {}", e));
    }

    messages::success(format!("Database initialized at {}", db_path));
    Ok(())
}
