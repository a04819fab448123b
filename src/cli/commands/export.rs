use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};
use crate::i18n::Catalog;
use crate::models::YearMonth;
use crate::utils::date::today;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        month,
        file,
        force,
        preview,
    } = cmd
    {
        let month = match month {
            Some(m) => YearMonth::parse(m)?,
            None => YearMonth::of(today()),
        };

        let catalog = Catalog::for_config(cfg);
        let pool = DbPool::open(&cfg.database)?;

        let req = ExportRequest {
            month,
            format: *format,
            file: file.clone(),
            force: *force,
            preview: *preview,
        };

        ExportLogic::export(&pool, cfg, &catalog, &req)?;
    }

    Ok(())
}
