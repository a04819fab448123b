// src/export/pdf_export.rs

use crate::core::calculator::{MonthlySummary, SummaryRow};
use crate::export::pdf::{PAGE_H, PdfManager, approx_text_width};
use crate::i18n::Catalog;
use crate::utils::date::display_date;
use crate::utils::formatting::{format_decimal, format_positive};

const LEFT: f32 = 40.0;
const RULE_END: f32 = 555.0;
const BOTTOM_LIMIT: f32 = PAGE_H - 40.0;

const TITLE_TOP: f32 = 40.0;
const MONTH_TOP: f32 = 60.0;
const HEADER_TOP: f32 = 90.0;

const TITLE_SIZE: f32 = 16.0;
const MONTH_SIZE: f32 = 12.0;
const HEADER_SIZE: f32 = 8.0;
const BODY_SIZE: f32 = 8.0;

const ROW_PITCH: f32 = 15.0;

/// date, task, company, work, leave, vacation, break, kms, travel h
const COL_WIDTHS: [f32; 9] = [65.0, 100.0, 70.0, 50.0, 50.0, 50.0, 40.0, 50.0, 50.0];
const TASK_COL: usize = 1;
const COMPANY_COL: usize = 2;

/// Fixed-layout A4 report.
///
/// `font_scale` multiplies the body font (see the theme text size).
pub fn render_pdf(summary: &MonthlySummary, catalog: &Catalog, font_scale: f32) -> Vec<u8> {
    let body_size = BODY_SIZE * font_scale;
    let line_pitch = body_size + 2.0;
    let sep = catalog.decimal_separator();

    let headers: Vec<String> = [
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
    .map(|k| catalog.t(k).to_string())
    .collect();

    let mut pdf = PdfManager::new();
    pdf.begin_page();
    draw_page_number(&mut pdf);

    pdf.text(LEFT, TITLE_TOP, TITLE_SIZE, true, catalog.t("summary_title"));
    pdf.text(
        LEFT,
        MONTH_TOP,
        MONTH_SIZE,
        false,
        &catalog.tf("month_label", &[("month", &catalog.month_year(&summary.month))]),
    );

    let mut y = draw_header_row(&mut pdf, &headers, HEADER_TOP);
    let mut fresh_page = true;

    for row in &summary.rows {
        let cells = row_cells(row, sep);
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if i == TASK_COL || i == COMPANY_COL {
                    wrap_cell(cell, COL_WIDTHS[i], body_size)
                } else {
                    vec![cell.clone()]
                }
            })
            .collect();

        let lines = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);
        let mut first = 0;

        // a row taller than a page continues on the next one
        while first < lines {
            let remaining = lines - first;
            let fits = y + row_height(remaining, line_pitch) <= BOTTOM_LIMIT;

            if !fits && !fresh_page {
                y = continuation_page(&mut pdf, &headers);
                fresh_page = true;
                continue;
            }

            let take = if fits {
                remaining
            } else {
                lines_fitting(BOTTOM_LIMIT - y, line_pitch).min(remaining)
            };

            let mut x = LEFT;
            for (i, cell_lines) in wrapped.iter().enumerate() {
                for (n, line) in cell_lines.iter().skip(first).take(take).enumerate() {
                    pdf.text(x, y + n as f32 * line_pitch, body_size, false, line);
                }
                x += COL_WIDTHS[i];
            }

            first += take;
            y += row_height(take, line_pitch);
            fresh_page = false;

            if first < lines {
                y = continuation_page(&mut pdf, &headers);
                fresh_page = true;
            }
        }
    }

    // totals need a rule, one row and some room
    if y + 10.0 + 15.0 + ROW_PITCH > BOTTOM_LIMIT {
        pdf.begin_page();
        draw_page_number(&mut pdf);
        y = TITLE_TOP;
    }

    y += 10.0;
    pdf.hline(LEFT, RULE_END, y);
    y += 15.0;

    let t = &summary.totals;
    let label_width: f32 = COL_WIDTHS[..3].iter().sum();
    let totals = [
        (label_width, catalog.t("totals_label").to_string()),
        (COL_WIDTHS[3], format_decimal(t.work_hours, sep)),
        (COL_WIDTHS[4], format_decimal(t.leave_hours, sep)),
        (COL_WIDTHS[5], format_decimal(t.vacation_hours, sep)),
        (COL_WIDTHS[6], String::new()),
        (COL_WIDTHS[7], format_decimal(t.travel_kms, sep)),
        (COL_WIDTHS[8], format_decimal(t.travel_hours, sep)),
    ];

    let mut x = LEFT;
    for (w, text) in &totals {
        pdf.text(x, y, body_size, true, text);
        x += w;
    }

    pdf.finish()
}

/// Header labels, then the rule. Returns the top of the first data row.
fn draw_header_row(pdf: &mut PdfManager, headers: &[String], top: f32) -> f32 {
    let mut x = LEFT;
    for (i, h) in headers.iter().enumerate() {
        pdf.text(x, top, HEADER_SIZE, true, h);
        x += COL_WIDTHS[i];
    }

    let rule = top + 10.0;
    pdf.hline(LEFT, RULE_END, rule);
    rule + 15.0
}

/// New page with the header row redrawn at the top.
fn continuation_page(pdf: &mut PdfManager, headers: &[String]) -> f32 {
    pdf.begin_page();
    draw_page_number(pdf);
    draw_header_row(pdf, headers, TITLE_TOP)
}

fn row_height(lines: usize, line_pitch: f32) -> f32 {
    ROW_PITCH + lines.saturating_sub(1) as f32 * line_pitch
}

/// Lines of a row that fit in `available` points, at least one.
fn lines_fitting(available: f32, line_pitch: f32) -> usize {
    (((available - ROW_PITCH) / line_pitch).floor() as i64 + 1).max(1) as usize
}

fn draw_page_number(pdf: &mut PdfManager) {
    let label = format!("- {} -", pdf.page_count());
    pdf.text(RULE_END - 20.0, BOTTOM_LIMIT + 20.0, HEADER_SIZE, false, &label);
}

fn row_cells(row: &SummaryRow, sep: &str) -> [String; 9] {
    [
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
    ]
}

fn wrap_cell(text: &str, width: f32, size: f32) -> Vec<String> {
    if text.is_empty() || approx_text_width(text, size) <= width - 4.0 {
        return vec![text.to_string()];
    }

    let max_chars = ((width - 4.0) / (size * 0.5)).floor().max(1.0) as usize;
    textwrap::wrap(text, max_chars)
        .into_iter()
        .map(|c| c.into_owned())
        .collect()
}
