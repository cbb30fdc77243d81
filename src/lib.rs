//! rTimeclock library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod gateway;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::logging::enable_logging;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::In | Commands::Out | Commands::Break => cli::commands::clock::handle(cli, cfg),
        Commands::Status => cli::commands::status::handle(cli, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(cli, cfg),
        Commands::Logs { .. } => cli::commands::logs::handle(cli, cfg),
        Commands::Filter { .. } => cli::commands::filter::handle(cli, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(cli, cfg),
        Commands::Sync => cli::commands::sync::handle(cli, cfg),
        Commands::Import { .. } => cli::commands::import::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Audit => cli::commands::audit::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, then apply command-line overrides
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(url) = &cli.backend {
        cfg.backend_url = url.clone();
    }

    if let Err(e) = enable_logging(&cfg.log_level) {
        ui::messages::warning(e);
    }

    dispatch(&cli, &cfg)
}
