use chrono::{NaiveDate, NaiveTime};
use workhours::core::calculator::{MonthlySummary, hours_decimal, shift_minutes};
use workhours::models::{EntryForm, EntryType, WorkEntry, YearMonth};

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn entry(id: i64, date: NaiveDate, start: &str, end: &str, kind: EntryType) -> WorkEntry {
    let mut e = WorkEntry::new(date, t(start), t(end));
    e.id = id;
    e.entry_type = kind;
    e
}

#[test]
fn test_shift_minutes_plain_day() {
    assert_eq!(shift_minutes(t("08:00"), t("17:00"), Some(60)), 480);
    assert_eq!(shift_minutes(t("08:00"), t("17:00"), None), 540);
}

#[test]
fn test_shift_minutes_crosses_midnight() {
    assert_eq!(shift_minutes(t("22:00"), t("06:00"), None), 480);
    assert_eq!(shift_minutes(t("23:30"), t("00:15"), Some(15)), 30);
}

#[test]
fn test_shift_minutes_equal_times_and_clamp() {
    assert_eq!(shift_minutes(t("09:00"), t("09:00"), None), 0);
    assert_eq!(shift_minutes(t("09:00"), t("09:30"), Some(45)), 0);
}

#[test]
fn test_hours_decimal() {
    assert_eq!(hours_decimal(90), 1.5);
    assert_eq!(hours_decimal(0), 0.0);
}

#[test]
fn test_summary_routes_hours_into_buckets() {
    let march = YearMonth::new(2025, 3).expect("month");

    let mut work = entry(1, d(2025, 3, 3), "08:00", "16:30", EntryType::Work);
    work.break_minutes = Some(30);
    work.travel_kms = Some(20.0);

    let mut leave = entry(2, d(2025, 3, 4), "14:00", "16:00", EntryType::Leave);
    leave.travel_hours = Some(0.5);

    let vacation = entry(3, d(2025, 3, 5), "08:00", "16:00", EntryType::Vacation);
    let other_month = entry(4, d(2025, 4, 1), "08:00", "16:00", EntryType::Work);

    let summary = MonthlySummary::build(march, &[work, leave, vacation, other_month]);

    assert_eq!(summary.rows.len(), 3);
    assert_eq!(summary.totals.work_hours, 8.0);
    assert_eq!(summary.totals.leave_hours, 2.0);
    assert_eq!(summary.totals.vacation_hours, 8.0);
    assert_eq!(summary.totals.travel_kms, 20.0);
    assert_eq!(summary.totals.travel_hours, 0.5);
    assert_eq!(summary.totals.net_minutes, 18 * 60);

    let leave_row = summary.rows.iter().find(|r| r.id == 2).expect("leave row");
    assert_eq!(leave_row.work_hours, 0.0);
    assert_eq!(leave_row.leave_hours, 2.0);
    assert_eq!(leave_row.break_minutes, 0);
}

#[test]
fn test_summary_orders_newest_first() {
    let march = YearMonth::new(2025, 3).expect("month");
    let entries = [
        entry(1, d(2025, 3, 1), "08:00", "12:00", EntryType::Work),
        entry(2, d(2025, 3, 20), "08:00", "12:00", EntryType::Work),
        entry(3, d(2025, 3, 20), "13:00", "17:00", EntryType::Work),
        entry(4, d(2025, 3, 10), "08:00", "12:00", EntryType::Work),
    ];

    let summary = MonthlySummary::build(march, &entries);
    let ids: Vec<i64> = summary.rows.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![3, 2, 4, 1]);
}

#[test]
fn test_summary_empty_month() {
    let summary = MonthlySummary::build(YearMonth::new(2024, 2).expect("month"), &[]);
    assert!(summary.is_empty());
    assert_eq!(summary.totals.work_hours, 0.0);
}

#[test]
fn test_year_month_bounds() {
    let feb = YearMonth::parse("2024-02").expect("parse");
    assert_eq!(feb.first_day(), d(2024, 2, 1));
    assert_eq!(feb.last_day(), d(2024, 2, 29));

    let dec = YearMonth::parse("2025-12").expect("parse");
    assert_eq!(dec.last_day(), d(2025, 12, 31));
    assert_eq!(dec.to_string(), "2025-12");

    assert!(YearMonth::parse("2025-13").is_err());
    assert!(YearMonth::parse("March").is_err());
}

#[test]
fn test_entry_form_requires_times() {
    let today = d(2025, 6, 2);

    let form = EntryForm {
        start: Some("08:00".into()),
        ..Default::default()
    };
    assert!(form.build(today).is_err());

    let form = EntryForm {
        start: Some("8:00".into()),
        end: Some("12:00".into()),
        break_minutes: Some(15),
        entry_type: Some("Ferie".into()),
        task: Some("Holiday".into()),
        ..Default::default()
    };
    let e = form.build(today).expect("valid form");

    assert_eq!(e.date, today);
    assert_eq!(e.entry_type, EntryType::Vacation);
    // vacation drops break and task
    assert_eq!(e.break_minutes, None);
    assert!(e.task.is_empty());
    assert_eq!(e.net_minutes(), 240);
}

#[test]
fn test_entry_form_rejects_negative_values() {
    let today = d(2025, 6, 2);

    let form = EntryForm {
        start: Some("08:00".into()),
        end: Some("12:00".into()),
        travel_kms: Some("-3".into()),
        ..Default::default()
    };
    assert!(form.build(today).is_err());

    let form = EntryForm {
        start: Some("08:00".into()),
        end: Some("12:00".into()),
        break_minutes: Some(-5),
        ..Default::default()
    };
    assert!(form.build(today).is_err());
}

#[test]
fn test_entry_type_codes() {
    assert_eq!(EntryType::from_code("WORK"), Some(EntryType::Work));
    assert_eq!(EntryType::from_code("Permesso"), Some(EntryType::Leave));
    assert_eq!(EntryType::from_code("v"), Some(EntryType::Vacation));
    assert_eq!(EntryType::from_code("overtime"), None);
    assert_eq!(EntryType::Leave.to_db_str(), "leave");
}
