use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::i18n::Catalog;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, fields } = cmd {
        let catalog = Catalog::for_config(cfg);
        let form = fields.to_form();

        if form.is_empty() {
            warning(catalog.t("nothing_to_update"));
            return Ok(());
        }

        let pool = DbPool::open(&cfg.database)?;
        let entry = AddLogic::edit(&pool, *id, &form)?;

        success(catalog.tf("entry_updated", &[("id", &entry.id.to_string())]));
        super::show::print_entry(&entry, &catalog);
    }

    Ok(())
}
