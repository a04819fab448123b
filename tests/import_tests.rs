mod common;
use chrono::{Local, NaiveDate, TimeZone};
use common::TestEnv;
use predicates::prelude::*;
use rusqlite::{Connection, params};
use std::path::Path;

fn local_noon_millis(y: i32, m: u32, d: u32) -> i64 {
    let naive = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid date");
    Local
        .from_local_datetime(&naive)
        .single()
        .expect("unambiguous local time")
        .timestamp_millis()
}

/// A database shaped like the mobile app's Room export.
fn create_room_db(path: &Path, with_company: bool) {
    std::fs::remove_file(path).ok();
    let conn = Connection::open(path).expect("open room db");

    let company = if with_company { ", company TEXT" } else { "" };
    conn.execute_batch(&format!(
        "CREATE TABLE work_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            startTime TEXT NOT NULL,
            endTime TEXT NOT NULL,
            breakTime INTEGER,
            task TEXT NOT NULL,
            date INTEGER NOT NULL,
            entryType TEXT NOT NULL,
            travelKms REAL,
            travelHours REAL{company}
        );"
    ))
    .expect("create room table");

    let rows = [
        ("08:00", "17:00", Some(60), "Install", local_noon_millis(2025, 5, 6), "Lavoro", Some(30.0)),
        ("14:00", "16:00", None, "Dentist", local_noon_millis(2025, 5, 7), "Permesso", None),
        ("bad", "17:00", None, "Broken", local_noon_millis(2025, 5, 8), "Lavoro", None),
    ];

    for (start, end, brk, task, date, kind, kms) in rows {
        conn.execute(
            "INSERT INTO work_entries (startTime, endTime, breakTime, task, date, entryType, travelKms, travelHours)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL)",
            params![start, end, brk, task, date, kind, kms],
        )
        .expect("insert room row");
    }

    if with_company {
        conn.execute("UPDATE work_entries SET company = 'Rossi Srl' WHERE id = 1", [])
            .expect("set company");
    }
}

#[test]
fn test_import_room_database() {
    let env = TestEnv::new("import_room");
    env.init();

    let room = env.home.join("room.db");
    create_room_db(&room, true);

    env.cmd()
        .args(["import", "--room", &room.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 entries, skipped 1."));

    env.cmd()
        .args(["list", "--period", "2025-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Install"))
        .stdout(predicate::str::contains("Rossi Srl"))
        .stdout(predicate::str::contains("Dentist"))
        .stdout(predicate::str::contains("Leave"))
        .stdout(predicate::str::contains("06/05/2025"))
        .stdout(predicate::str::contains("Broken").not());

    env.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("import"));
}

#[test]
fn test_import_room_without_company_column() {
    let env = TestEnv::new("import_room_old");
    env.init();

    let room = env.home.join("room_old.db");
    create_room_db(&room, false);

    env.cmd()
        .args(["import", "--room", &room.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 entries"));
}

#[test]
fn test_import_rejects_foreign_database() {
    let env = TestEnv::new("import_foreign");
    env.init();

    let other = env.home.join("other.db");
    let conn = Connection::open(&other).expect("open");
    conn.execute_batch("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT);")
        .expect("create");
    drop(conn);

    env.cmd()
        .args(["import", "--room", &other.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a mobile backup"));
}

#[test]
fn test_import_missing_file() {
    let env = TestEnv::new("import_missing");
    env.init();

    env.cmd()
        .args(["import", "--room", "/definitely/not/here.db"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}
