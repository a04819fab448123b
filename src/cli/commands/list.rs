use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::theme::ThemeLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all, load_range};
use crate::errors::{AppError, AppResult};
use crate::i18n::Catalog;
use crate::models::{EntryType, WorkEntry, YearMonth};
use crate::ui::messages::{info, warning};
use crate::utils::date::{display_date, today};
use crate::utils::formatting::{format_decimal, format_plain};
use crate::utils::period::parse_period;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_hm, to_db_time};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, entry_type } = cmd {
        let catalog = Catalog::for_config(cfg);

        let type_filter = match entry_type {
            Some(t) => Some(
                EntryType::from_code(t).ok_or_else(|| AppError::InvalidEntryType(t.clone()))?,
            ),
            None => None,
        };

        let pool = DbPool::open(&cfg.database)?;

        let mut entries = match period {
            Some(p) if !p.eq_ignore_ascii_case("all") => {
                let (from, to) = parse_period(p)?;
                load_range(&pool.conn, from, to)?
            }
            _ => load_all(&pool.conn)?,
        };

        if let Some(t) = type_filter {
            entries.retain(|e| e.entry_type == t);
        }

        if entries.is_empty() {
            info(catalog.t("no_entries"));
        } else {
            print_table(&entries, &catalog, cfg);
            println!(
                "\n{}",
                catalog.tf("entries_count", &[("count", &entries.len().to_string())])
            );
        }

        print_reminder(cfg, &catalog);
    }

    Ok(())
}

fn print_table(entries: &[WorkEntry], catalog: &Catalog, cfg: &Config) {
    let sep = catalog.decimal_separator();

    let columns = [
        ("header_id", 3),
        ("header_date", 10),
        ("header_type", 8),
        ("header_start", 5),
        ("header_end", 5),
        ("header_break", 5),
        ("header_hours", 5),
        ("header_task", 10),
        ("header_company", 8),
        ("header_travel_kms", 5),
        ("header_travel_hours", 5),
    ]
    .into_iter()
    .map(|(key, w)| Column::new(catalog.t(key), w))
    .collect();

    let mut table = Table::new(columns)
        .with_styles(ThemeLogic::header_style(cfg), ThemeLogic::text_style(cfg));

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            display_date(&e.date),
            catalog.entry_type(e.entry_type).to_string(),
            to_db_time(&e.start_time),
            to_db_time(&e.end_time),
            e.break_minutes.map(|b| b.to_string()).unwrap_or_else(|| "-".into()),
            format_hm(e.net_minutes()),
            e.task.clone(),
            e.company.clone().unwrap_or_default(),
            e.travel_kms.map(format_plain).unwrap_or_default(),
            e.travel_hours
                .map(|h| format_decimal(h, sep))
                .unwrap_or_default(),
        ]);
    }

    print!("{}", table.render());
}

/// Late in the month, nudge the user to export the summary.
fn print_reminder(cfg: &Config, catalog: &Catalog) {
    let now = today();
    if cfg.reminder_day == 0 || now.day() < cfg.reminder_day {
        return;
    }

    let month = YearMonth::of(now);
    warning(catalog.tf("reminder", &[("month", &catalog.month_year(&month))]));
}
