// src/export/xlsx.rs

use crate::core::calculator::MonthlySummary;
use crate::errors::{AppError, AppResult};
use crate::i18n::Catalog;
use crate::utils::date::display_date;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

const FIRST_DATA_ROW: u32 = 3;

/// Styled workbook with the same columns as the CSV summary.
pub fn render_xlsx(summary: &MonthlySummary, catalog: &Catalog) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let title_format = Format::new().set_bold().set_font_size(14);
    worksheet
        .write_with_format(0, 0, catalog.t("summary_title"), &title_format)
        .map_err(to_export_error)?;
    worksheet
        .write(
            1,
            0,
            catalog.tf("month_label", &[("month", &catalog.month_year(&summary.month))]),
        )
        .map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers: Vec<&str> = [
        "header_date",
        "header_task",
        "header_company",
        "header_work_hours",
        "header_leave_hours",
        "header_vacation_hours",
        "header_break",
        "header_travel_kms",
        "header_travel_hours",
    ]
    .iter()
    .map(|k| catalog.t(k))
    .collect();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let header_row = FIRST_DATA_ROW - 1;
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet
        .set_freeze_panes(FIRST_DATA_ROW, 0)
        .map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (i, r) in summary.rows.iter().enumerate() {
        let row = FIRST_DATA_ROW + i as u32;
        let band = if i % 2 == 0 { band1 } else { band2 };

        let date = display_date(&r.date);
        let company = r.company.clone().unwrap_or_default();

        write_text(worksheet, row, 0, &date, band)?;
        write_text(worksheet, row, 1, &r.task, band)?;
        write_text(worksheet, row, 2, &company, band)?;
        write_number(worksheet, row, 3, Some(r.work_hours).filter(|v| *v > 0.0), "0.00", band)?;
        write_number(worksheet, row, 4, Some(r.leave_hours).filter(|v| *v > 0.0), "0.00", band)?;
        write_number(worksheet, row, 5, Some(r.vacation_hours).filter(|v| *v > 0.0), "0.00", band)?;
        write_number(worksheet, row, 6, Some(r.break_minutes as f64), "0", band)?;
        write_number(worksheet, row, 7, r.travel_kms.filter(|v| *v > 0.0), "0.00", band)?;
        write_number(worksheet, row, 8, r.travel_hours.filter(|v| *v > 0.0), "0.00", band)?;

        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(date.as_str()));
        col_widths[1] = col_widths[1].max(UnicodeWidthStr::width(r.task.as_str()));
        col_widths[2] = col_widths[2].max(UnicodeWidthStr::width(company.as_str()));
    }

    // ---------------------------
    // Totals
    // ---------------------------
    let totals_row = FIRST_DATA_ROW + summary.rows.len() as u32 + 1;
    let bold = Format::new().set_bold().set_border(FormatBorder::Thin);
    let bold_num = Format::new()
        .set_bold()
        .set_num_format("0.00")
        .set_align(FormatAlign::Right)
        .set_border(FormatBorder::Thin);

    let t = &summary.totals;
    worksheet
        .write_with_format(totals_row, 0, catalog.t("totals_label"), &bold)
        .map_err(to_export_error)?;
    for (col, value) in [
        (3u16, t.work_hours),
        (4, t.leave_hours),
        (5, t.vacation_hours),
        (7, t.travel_kms),
        (8, t.travel_hours),
    ] {
        worksheet
            .write_with_format(totals_row, col, value, &bold_num)
            .map_err(to_export_error)?;
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, (*w).max(8) as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save_to_buffer().map_err(to_export_error)
}

fn band_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_text(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    ws.write_with_format(row, col, s, &band_format(bg))
        .map_err(to_export_error)?;
    Ok(())
}

/// Numeric cell, or a blank banded cell for `None`.
fn write_number(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    v: Option<f64>,
    num_format: &str,
    bg: Color,
) -> AppResult<()> {
    let fmt = band_format(bg).set_num_format(num_format).set_align(FormatAlign::Right);
    let written = match v {
        Some(n) => ws.write_with_format(row, col, n, &fmt),
        None => ws.write_blank(row, col, &fmt),
    };
    written.map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
