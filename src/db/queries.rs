use crate::errors::{AppError, AppResult};
use crate::models::{EntryType, WorkEntry, YearMonth};
use crate::utils::date::to_db_date;
use crate::utils::time::to_db_time;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ENTRIES: &str = "SELECT id, date, start_time, end_time, break_minutes, task,
        entry_type, travel_kms, travel_hours, company, created_at
 FROM work_entries";

/// Newest first, the order of every list and report.
const ORDER_NEWEST: &str = "ORDER BY date DESC, start_time DESC, id DESC";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<WorkEntry> {
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;
    let type_str: String = row.get("entry_type")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let start_time = NaiveTime::parse_from_str(&start_str, "%H:%M")
        .map_err(|_| conversion_error(AppError::InvalidTime(start_str.clone())))?;

    let end_time = NaiveTime::parse_from_str(&end_str, "%H:%M")
        .map_err(|_| conversion_error(AppError::InvalidTime(end_str.clone())))?;

    let entry_type = EntryType::from_db_str(&type_str)
        .ok_or_else(|| conversion_error(AppError::InvalidEntryType(type_str.clone())))?;

    Ok(WorkEntry {
        id: row.get("id")?,
        date,
        start_time,
        end_time,
        break_minutes: row.get("break_minutes")?,
        task: row.get::<_, Option<String>>("task")?.unwrap_or_default(),
        entry_type,
        travel_kms: row.get("travel_kms")?,
        travel_hours: row.get("travel_hours")?,
        company: row.get("company")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a new entry and return its generated id.
pub fn insert_entry(conn: &Connection, e: &WorkEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_entries
            (date, start_time, end_time, break_minutes, task, entry_type,
             travel_kms, travel_hours, company, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            to_db_date(&e.date),
            to_db_time(&e.start_time),
            to_db_time(&e.end_time),
            e.break_minutes,
            e.task,
            e.entry_type.to_db_str(),
            e.travel_kms,
            e.travel_hours,
            e.company,
            e.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_entry(conn: &Connection, e: &WorkEntry) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE work_entries
         SET date = ?1, start_time = ?2, end_time = ?3, break_minutes = ?4, task = ?5,
             entry_type = ?6, travel_kms = ?7, travel_hours = ?8, company = ?9
         WHERE id = ?10",
        params![
            to_db_date(&e.date),
            to_db_time(&e.start_time),
            to_db_time(&e.end_time),
            e.break_minutes,
            e.task,
            e.entry_type.to_db_str(),
            e.travel_kms,
            e.travel_hours,
            e.company,
            e.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::EntryNotFound(e.id));
    }
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM work_entries WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

pub fn get_entry(conn: &Connection, id: i64) -> AppResult<WorkEntry> {
    let mut stmt = conn.prepare(&format!("{SELECT_ENTRIES} WHERE id = ?1"))?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::EntryNotFound(id))
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<WorkEntry>> {
    let mut stmt = conn.prepare(&format!("{SELECT_ENTRIES} {ORDER_NEWEST}"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Entries with `from <= date <= to`.
pub fn load_range(conn: &Connection, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<WorkEntry>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_ENTRIES} WHERE date BETWEEN ?1 AND ?2 {ORDER_NEWEST}"
    ))?;
    let rows = stmt.query_map(params![to_db_date(&from), to_db_date(&to)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_month(conn: &Connection, month: &YearMonth) -> AppResult<Vec<WorkEntry>> {
    load_range(conn, month.first_day(), month.last_day())
}

/// Months that have at least one entry, newest first.
pub fn distinct_months(conn: &Connection) -> AppResult<Vec<YearMonth>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT substr(date, 1, 7) AS ym FROM work_entries ORDER BY ym DESC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(YearMonth::parse(&r?)?);
    }
    Ok(out)
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM work_entries", [], |row| row.get(0))?)
}
