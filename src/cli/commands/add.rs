use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::i18n::Catalog;
use crate::ui::messages::success;
use crate::utils::date::{display_date, today};
use crate::utils::time::format_hm;

/// Record a new entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { fields } = cmd {
        let catalog = Catalog::for_config(cfg);
        let pool = DbPool::open(&cfg.database)?;

        let entry = AddLogic::apply(&pool, &fields.to_form(), today())?;

        success(catalog.tf(
            "entry_saved",
            &[
                ("id", &entry.id.to_string()),
                ("date", &display_date(&entry.date)),
                ("hours", &format_hm(entry.net_minutes())),
            ],
        ));
    }

    Ok(())
}
