use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::i18n::Catalog;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { room } = cmd {
        let catalog = Catalog::for_config(cfg);
        let mut pool = DbPool::open(&cfg.database)?;

        let report = ImportLogic::import_room(&mut pool, &expand_tilde(room))?;

        success(catalog.tf(
            "import_done",
            &[
                ("imported", &report.imported.to_string()),
                ("skipped", &report.skipped.to_string()),
            ],
        ));
    }

    Ok(())
}
