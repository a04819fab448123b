//! Import from the mobile app's Room database (`work_entries` with
//! camelCase columns and the date stored as epoch milliseconds).

use crate::db::log::ttlog_quiet;
use crate::db::migrate::table_has_column;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryType, WorkEntry};
use crate::ui::messages::warning;
use crate::utils::time::parse_time;
use chrono::{DateTime, Local};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

struct RoomRow {
    id: i64,
    start: String,
    end: String,
    break_time: Option<i32>,
    task: Option<String>,
    date_ms: i64,
    entry_type: String,
    travel_kms: Option<f64>,
    travel_hours: Option<f64>,
    company: Option<String>,
}

pub struct ImportLogic;

impl ImportLogic {
    pub fn import_room(pool: &mut DbPool, source: &Path) -> AppResult<ImportReport> {
        if !source.is_file() {
            return Err(AppError::Import(format!("file not found: {}", source.display())));
        }

        let room = Connection::open_with_flags(source, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let rows = read_room_rows(&room)?;

        let mut report = ImportReport::default();
        let tx = pool.conn.transaction()?;

        for row in rows {
            match to_entry(&row) {
                Some(entry) => {
                    insert_entry(&tx, &entry)?;
                    report.imported += 1;
                }
                None => {
                    warning(format!("Skipped row #{}: unreadable time or type", row.id));
                    report.skipped += 1;
                }
            }
        }

        tx.commit()?;

        ttlog_quiet(
            &pool.conn,
            "import",
            &source.to_string_lossy(),
            &format!("imported {}, skipped {}", report.imported, report.skipped),
        );

        Ok(report)
    }
}

fn read_room_rows(room: &Connection) -> AppResult<Vec<RoomRow>> {
    if !table_has_column(room, "work_entries", "startTime")? {
        return Err(AppError::Import(
            "not a mobile backup: table work_entries(startTime, ...) not found".into(),
        ));
    }

    // older app versions had no company field
    let company_col = if table_has_column(room, "work_entries", "company")? {
        "company"
    } else {
        "NULL"
    };

    let mut stmt = room.prepare(&format!(
        "SELECT id, startTime, endTime, breakTime, task, date, entryType,
                travelKms, travelHours, {company_col}
         FROM work_entries ORDER BY date ASC, id ASC"
    ))?;

    let rows = stmt.query_map([], |row| {
        Ok(RoomRow {
            id: row.get(0)?,
            start: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            end: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            break_time: row.get(3)?,
            task: row.get(4)?,
            date_ms: row.get(5)?,
            entry_type: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
            travel_kms: row.get(7)?,
            travel_hours: row.get(8)?,
            company: row.get(9)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn to_entry(row: &RoomRow) -> Option<WorkEntry> {
    let start = parse_time(&row.start)?;
    let end = parse_time(&row.end)?;
    let entry_type = EntryType::from_code(&row.entry_type)?;
    let date = DateTime::from_timestamp_millis(row.date_ms)?
        .with_timezone(&Local)
        .date_naive();

    let mut entry = WorkEntry::new(date, start, end);
    entry.entry_type = entry_type;
    entry.break_minutes = row.break_time.filter(|b| *b >= 0);
    entry.task = row.task.clone().unwrap_or_default().trim().to_string();
    entry.travel_kms = row.travel_kms.filter(|v| *v >= 0.0);
    entry.travel_hours = row.travel_hours.filter(|v| *v >= 0.0);
    entry.company = row.company.clone();
    entry.normalize();

    Some(entry)
}
