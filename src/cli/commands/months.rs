use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{distinct_months, load_month};
use crate::errors::AppResult;
use crate::i18n::Catalog;
use crate::models::WorkEntry;
use crate::ui::messages::{header, info};
use crate::utils::time::format_hm;

/// Months having entries, newest first, with their entry count and hours.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Months) {
        let catalog = Catalog::for_config(cfg);
        let pool = DbPool::open(&cfg.database)?;

        let months = distinct_months(&pool.conn)?;
        if months.is_empty() {
            info(catalog.t("no_entries"));
            return Ok(());
        }

        header(catalog.t("months_title"));
        for ym in months {
            let entries = load_month(&pool.conn, &ym)?;
            let minutes: i64 = entries.iter().map(WorkEntry::net_minutes).sum();

            println!(
                "{:<20} {:>8}  {:>7} h",
                catalog.month_year(&ym),
                ym.to_string(),
                format_hm(minutes)
            );
        }
    }

    Ok(())
}
