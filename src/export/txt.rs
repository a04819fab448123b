// src/export/txt.rs

use crate::core::calculator::MonthlySummary;
use crate::i18n::Catalog;
use crate::utils::date::display_date;
use crate::utils::formatting::format_decimal;
use crate::utils::time::format_hm;
use std::fmt::Write;

const RULE_WIDTH: usize = 50;

/// Plain-text monthly summary: one block per entry, then the totals.
pub fn render_txt(summary: &MonthlySummary, catalog: &Catalog) -> Vec<u8> {
    let sep = catalog.decimal_separator();
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} - {}",
        catalog.t("summary_title"),
        catalog.month_year(&summary.month)
    );
    let _ = writeln!(out, "{rule}");

    for row in &summary.rows {
        let _ = writeln!(out, "{}: {}", catalog.t("header_date"), display_date(&row.date));
        let _ = writeln!(out, "{}: {}", catalog.t("header_task"), row.task);
        if let Some(company) = row.company.as_deref().filter(|c| !c.is_empty()) {
            let _ = writeln!(out, "{}: {}", catalog.t("header_company"), company);
        }
        let _ = writeln!(
            out,
            "{}: {}",
            catalog.t("header_type"),
            catalog.entry_type(row.entry_type)
        );
        let _ = writeln!(
            out,
            "{}: {} - {} ({})",
            catalog.t("header_hours"),
            row.start,
            row.end,
            format_hm(row.net_minutes)
        );
        let _ = writeln!(
            out,
            "{}: {} {}",
            catalog.t("header_break"),
            row.break_minutes,
            catalog.t("label_minutes")
        );
        if let Some(kms) = row.travel_kms {
            let _ = writeln!(out, "{}: {}", catalog.t("header_travel_kms"), format_decimal(kms, sep));
        }
        if let Some(h) = row.travel_hours {
            let _ = writeln!(out, "{}: {}", catalog.t("header_travel_hours"), format_decimal(h, sep));
        }
        let _ = writeln!(out, "{rule}");
    }

    let t = &summary.totals;
    let _ = writeln!(out, "{}", catalog.t("totals_label"));
    let _ = writeln!(out, "{}: {}", catalog.t("label_total_hours"), format_hm(t.net_minutes));
    let _ = writeln!(out, "{}: {}", catalog.t("header_work_hours"), format_decimal(t.work_hours, sep));
    let _ = writeln!(out, "{}: {}", catalog.t("header_leave_hours"), format_decimal(t.leave_hours, sep));
    let _ = writeln!(
        out,
        "{}: {}",
        catalog.t("header_vacation_hours"),
        format_decimal(t.vacation_hours, sep)
    );
    let _ = writeln!(out, "{}: {}", catalog.t("header_travel_kms"), format_decimal(t.travel_kms, sep));
    let _ = writeln!(
        out,
        "{}: {}",
        catalog.t("header_travel_hours"),
        format_decimal(t.travel_hours, sep)
    );

    out.into_bytes()
}
