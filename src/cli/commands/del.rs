use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::get_entry;
use crate::errors::AppResult;
use crate::i18n::Catalog;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::date::display_date;

/// Delete an entry, asking first unless `--yes`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let catalog = Catalog::for_config(cfg);
        let pool = DbPool::open(&cfg.database)?;

        // fails with EntryNotFound before any prompt
        let entry = get_entry(&pool.conn, *id)?;

        if !*yes {
            let question = catalog.tf(
                "confirm_delete",
                &[("id", &id.to_string()), ("date", &display_date(&entry.date))],
            );
            if !ask_confirmation(&question) {
                info(catalog.t("operation_cancelled"));
                return Ok(());
            }
        }

        DeleteLogic::apply(&pool, *id)?;
        success(catalog.tf("entry_deleted", &[("id", &id.to_string())]));
    }

    Ok(())
}
