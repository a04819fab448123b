use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::get_entry;
use crate::errors::AppResult;
use crate::i18n::Catalog;
use crate::models::WorkEntry;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date::display_date;
use crate::utils::formatting::{format_decimal, format_plain};
use crate::utils::time::{format_hm, to_db_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let catalog = Catalog::for_config(cfg);
        let pool = DbPool::open(&cfg.database)?;
        let entry = get_entry(&pool.conn, *id)?;

        header(format!("#{} · {}", entry.id, display_date(&entry.date)));
        print_entry(&entry, &catalog);
    }

    Ok(())
}

/// One `label: value` line per field; absent optional fields are skipped.
pub(crate) fn print_entry(e: &WorkEntry, catalog: &Catalog) {
    let sep = catalog.decimal_separator();
    let line = |key: &str, value: &str| {
        println!("{CYAN}{:<14}{RESET} {}", catalog.t(key), value);
    };

    line("header_date", &display_date(&e.date));
    line("header_type", catalog.entry_type(e.entry_type));
    line("header_start", &to_db_time(&e.start_time));
    line("header_end", &to_db_time(&e.end_time));
    line(
        "header_break",
        &format!("{} {}", e.break_minutes.unwrap_or(0), catalog.t("label_minutes")),
    );
    line("header_hours", &format_hm(e.net_minutes()));

    if !e.task.is_empty() {
        line("header_task", &e.task);
    }
    if let Some(c) = &e.company {
        line("header_company", c);
    }
    if let Some(k) = e.travel_kms {
        line("header_travel_kms", &format_plain(k));
    }
    if let Some(h) = e.travel_hours {
        line("header_travel_hours", &format_decimal(h, sep));
    }
}
