use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::db::queries::count_entries;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SCHEMA
    //
    let versions = applied_versions(&pool.conn)?;
    let schema = versions
        .last()
        .cloned()
        .unwrap_or_else(|| format!("{GREY}none{RESET}"));
    println!("{}• Schema:{} {} ({} migrations)", CYAN, RESET, schema, versions.len());

    //
    // 3) TOTAL ENTRIES
    //
    let count = count_entries(&pool.conn)?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 4) DATE RANGE
    //
    let bounds: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM work_entries",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (first, last) = bounds.unwrap_or((None, None));
    let dash = format!("{GREY}--{RESET}");

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.as_deref().unwrap_or(&dash));
    println!("    to:   {}", last.as_deref().unwrap_or(&dash));

    //
    // 5) AVERAGE ENTRIES/MONTH
    //
    let months: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT substr(date, 1, 7)) FROM work_entries",
        [],
        |row| row.get(0),
    )?;

    if months > 0 {
        let avg = count as f64 / months as f64;
        println!("{}• Average entries/month:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
