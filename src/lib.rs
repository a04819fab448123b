//! workhours library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Db { .. } => c::db::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Add { .. } => c::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => c::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => c::del::handle(&cli.command, cfg),
        Commands::Show { .. } => c::show::handle(&cli.command, cfg),
        Commands::List { .. } => c::list::handle(&cli.command, cfg),
        Commands::Months => c::months::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
        Commands::Files { .. } => c::files::handle(&cli.command, cfg),
        Commands::Theme { .. } => c::theme::handle(&cli.command, cfg),
        Commands::Lang { .. } => c::lang::handle(&cli.command, cfg),
        Commands::Update { .. } => c::update::handle(&cli.command, cfg),
        Commands::Info => c::info::handle(&cli.command, cfg),
        Commands::Backup { .. } => c::backup::handle(&cli.command, cfg),
        Commands::Import { .. } => c::import::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // loaded once; `--db` only overrides the in-memory copy
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
