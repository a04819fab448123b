// src/export/csv_export.rs

use crate::core::calculator::MonthlySummary;
use crate::errors::{AppError, AppResult};
use crate::i18n::Catalog;
use crate::utils::date::display_date;
use crate::utils::formatting::{format_decimal, format_positive};
use csv::{Terminator, WriterBuilder};
use std::io::Write;

/// `;`-delimited monthly summary.
///
/// Layout: title, month label, blank line, header, one row per entry,
/// blank line, totals row. Zero hour buckets and absent travel values
/// are left empty.
pub fn render_csv(summary: &MonthlySummary, catalog: &Catalog) -> AppResult<Vec<u8>> {
    let sep = catalog.decimal_separator();
    let mut buf: Vec<u8> = Vec::new();

    writeln!(buf, "{}", catalog.t("summary_title"))?;
    writeln!(
        buf,
        "{}",
        catalog.tf("month_label", &[("month", &catalog.month_year(&summary.month))])
    )?;
    writeln!(buf)?;

    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(buf);

    wtr.write_record([
        catalog.t("header_date"),
        catalog.t("header_task"),
        catalog.t("header_company"),
        catalog.t("header_work_hours"),
        catalog.t("header_leave_hours"),
        catalog.t("header_vacation_hours"),
        catalog.t("header_break"),
        catalog.t("header_travel_kms"),
        catalog.t("header_travel_hours"),
    ])
    .map_err(to_export_error)?;

    for row in &summary.rows {
        wtr.write_record([
            display_date(&row.date),
            row.task.clone(),
            row.company.clone().unwrap_or_default(),
            format_positive(row.work_hours, sep),
            format_positive(row.leave_hours, sep),
            format_positive(row.vacation_hours, sep),
            row.break_minutes.to_string(),
            row.travel_kms.map(|v| format_positive(v, sep)).unwrap_or_default(),
            row.travel_hours
                .map(|v| format_positive(v, sep))
                .unwrap_or_default(),
        ])
        .map_err(to_export_error)?;
    }

    let mut buf = wtr.into_inner().map_err(to_export_error)?;

    let t = &summary.totals;
    writeln!(buf)?;
    writeln!(
        buf,
        "{};;;{};{};{};;{};{}",
        catalog.t("totals_label"),
        format_decimal(t.work_hours, sep),
        format_decimal(t.leave_hours, sep),
        format_decimal(t.vacation_hours, sep),
        format_decimal(t.travel_kms, sep),
        format_decimal(t.travel_hours, sep)
    )?;

    Ok(buf)
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
