use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the export folder
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing workhours…");

    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    let cfg = Config::load()?;
    fs::create_dir_all(crate::utils::path::expand_tilde(&cfg.export_dir))?;

    ttlog_quiet(
        &pool.conn,
        "init",
        &db_path,
        &format!("Database initialized at {db_path}"),
    );

    success(format!("Database initialized at {db_path}"));
    Ok(())
}
