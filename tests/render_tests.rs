use chrono::{NaiveDate, NaiveTime};
use workhours::core::calculator::MonthlySummary;
use workhours::core::update::{UpdateLogic, parse_version};
use workhours::export::{render_csv, render_pdf, render_txt};
use workhours::i18n::Catalog;
use workhours::models::{EntryType, WorkEntry, YearMonth};
use workhours::utils::period::parse_period;

fn sample_summary() -> MonthlySummary {
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).expect("date");
    let start = NaiveTime::from_hms_opt(8, 0, 0).expect("time");
    let end = NaiveTime::from_hms_opt(12, 30, 0).expect("time");

    let mut e = WorkEntry::new(date, start, end);
    e.id = 7;
    e.entry_type = EntryType::Work;
    e.task = "Ops".into();
    e.travel_hours = Some(1.25);

    MonthlySummary::build(YearMonth::new(2025, 3).expect("month"), &[e])
}

#[test]
fn test_render_csv_english() {
    let csv = render_csv(&sample_summary(), &Catalog::english()).expect("csv");
    let text = String::from_utf8(csv).expect("utf8");

    assert!(text.contains("10/03/2025;Ops;;4.50;;;0;;1.25\n"));
    assert!(text.ends_with("Totals;;;4.50;0.00;0.00;;0.00;1.25\n"));
}

#[test]
fn test_render_csv_italian_uses_comma() {
    let catalog = Catalog::load("it").expect("italian catalog");
    let csv = render_csv(&sample_summary(), &catalog).expect("csv");
    let text = String::from_utf8(csv).expect("utf8");

    assert!(text.starts_with("Riepilogo ore lavorative\nMese: Marzo 2025\n\n"));
    assert!(text.contains("10/03/2025;Ops;;4,50;;;0;;1,25\n"));
}

#[test]
fn test_render_txt_totals() {
    let text = String::from_utf8(render_txt(&sample_summary(), &Catalog::english())).expect("utf8");

    assert!(text.starts_with("Work hours summary - March 2025\n"));
    assert!(text.contains("Type: Work"));
    assert!(text.contains("Hours: 08:00 - 12:30 (4:30)"));
    assert!(text.contains("Travel h: 1.25"));
    assert!(!text.contains("Company:"));
    assert!(text.contains("Total hours: 4:30"));
}

#[test]
fn test_render_pdf_paginates_long_months() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).expect("date");
    let start = NaiveTime::from_hms_opt(8, 0, 0).expect("time");
    let end = NaiveTime::from_hms_opt(9, 0, 0).expect("time");

    let entries: Vec<WorkEntry> = (0..120)
        .map(|i| {
            let mut e = WorkEntry::new(date, start, end);
            e.id = i;
            e.task = format!("Task number {i} with a rather long description to wrap");
            e
        })
        .collect();

    let summary = MonthlySummary::build(YearMonth::new(2025, 3).expect("month"), &entries);
    let pdf = render_pdf(&summary, &Catalog::english(), 1.0);
    let text = String::from_utf8_lossy(&pdf);

    assert!(pdf.starts_with(b"%PDF"));

    let pages: usize = text
        .split("/Count ")
        .nth(1)
        .and_then(|s| s.split(|c: char| !c.is_ascii_digit()).next())
        .and_then(|n| n.parse().ok())
        .expect("page count");
    assert!(pages > 1, "expected several pages, got {pages}");
    assert!(text.matches("(Date)").count() >= pages);
}

/// Baseline heights of every text object in the (uncompressed) content streams.
fn text_baselines(text: &str) -> Vec<f32> {
    text.lines()
        .filter(|l| l.ends_with(" Tm"))
        .filter_map(|l| {
            let parts: Vec<&str> = l.split_whitespace().collect();
            parts.get(parts.len().checked_sub(2)?)?.parse().ok()
        })
        .collect()
}

#[test]
fn test_render_pdf_splits_row_taller_than_page() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 4).expect("date");
    let start = NaiveTime::from_hms_opt(8, 0, 0).expect("time");
    let end = NaiveTime::from_hms_opt(17, 0, 0).expect("time");

    let mut e = WorkEntry::new(date, start, end);
    e.id = 1;
    e.task = (0..1500).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");

    let summary = MonthlySummary::build(YearMonth::new(2025, 3).expect("month"), &[e]);
    let pdf = render_pdf(&summary, &Catalog::english(), 1.0);
    let text = String::from_utf8_lossy(&pdf);

    let pages: usize = text
        .split("/Count ")
        .nth(1)
        .and_then(|s| s.split(|c: char| !c.is_ascii_digit()).next())
        .and_then(|n| n.parse().ok())
        .expect("page count");
    assert!(pages > 2, "expected the row to span pages, got {pages}");

    // nothing below the bottom margin except the page numbers
    let baselines = text_baselines(&text);
    assert!(!baselines.is_empty());
    let below_margin = baselines.iter().filter(|y| **y < 40.0).count();
    assert_eq!(below_margin, pages);
    assert!(baselines.iter().all(|y| *y >= 20.0));

    // the whole task is drawn
    assert!(text.contains("w0 "));
    assert!(text.contains("w1499"));
}

#[test]
fn test_parse_period_forms() {
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("date");

    assert_eq!(parse_period("2025").expect("year"), (d(2025, 1, 1), d(2025, 12, 31)));
    assert_eq!(parse_period("2024-02").expect("month"), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(parse_period("2025-03-05").expect("day"), (d(2025, 3, 5), d(2025, 3, 5)));
    assert_eq!(
        parse_period("2025-01:2025-03").expect("range"),
        (d(2025, 1, 1), d(2025, 3, 31))
    );

    assert!(parse_period("2025:2025-03").is_err());
    assert!(parse_period("2025-05:2025-01").is_err());
    assert!(parse_period("yesterday").is_err());
}

#[test]
fn test_version_comparison() {
    let status = UpdateLogic::from_manifest(r#"{ "tag_name": "v999.1.0", "html_url": "https://x" }"#)
        .expect("manifest");
    assert!(status.is_update_available());
    assert_eq!(status.url.as_deref(), Some("https://x"));

    let status = UpdateLogic::from_manifest(r#"{ "version": "0.0.1" }"#).expect("manifest");
    assert!(!status.is_update_available());

    assert!(parse_version("V1.2.3").is_ok());
    assert!(parse_version("one.two").is_err());
    assert!(UpdateLogic::from_manifest(r#"{ "url": "https://x" }"#).is_err());
}

#[test]
fn test_catalog_lookup_and_fallback() {
    let it = Catalog::load("it").expect("italian");
    assert_eq!(it.entry_type(EntryType::Leave), "Permesso");
    assert_eq!(it.decimal_separator(), ",");
    assert_eq!(
        it.export_file_stem(&YearMonth::new(2025, 3).expect("month")),
        "Riepilogo_Marzo_2025"
    );
    assert_eq!(it.tf("entry_deleted", &[("id", "4")]), "Voce #4 eliminata.");

    let en = Catalog::english();
    assert_eq!(en.t("no_such_key"), "no_such_key");
    assert_eq!(en.month_name(12), "December");
}
