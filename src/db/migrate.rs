use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

type MigrationFn = fn(&Connection) -> Result<()>;

/// Ordered schema migrations: (version, description, function).
///
/// Each one is recorded in the `log` table as `migration_applied` with the
/// version as target, so it runs at most once per database.
const MIGRATIONS: [(&str, &str, MigrationFn); 2] = [
    (
        "20250301_0001_create_work_entries",
        "Created work_entries table",
        create_work_entries_table,
    ),
    (
        "20250402_0002_add_company_column",
        "Added company column to work_entries",
        add_company_column,
    ),
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column named `column`.
pub(crate) fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn create_work_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_entries (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            date          TEXT NOT NULL,
            start_time    TEXT NOT NULL,
            end_time      TEXT NOT NULL,
            break_minutes INTEGER,
            task          TEXT NOT NULL DEFAULT '',
            entry_type    TEXT NOT NULL DEFAULT 'work'
                          CHECK(entry_type IN ('work','leave','vacation')),
            travel_kms    REAL,
            travel_hours  REAL,
            company       TEXT,
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_work_entries_date ON work_entries(date);
        "#,
    )
}

/// Databases created before companies were tracked lack the column.
fn add_company_column(conn: &Connection) -> Result<()> {
    if table_has_column(conn, "work_entries", "company")? {
        return Ok(());
    }

    warning("Adding 'company' column to work_entries table...");
    conn.execute("ALTER TABLE work_entries ADD COLUMN company TEXT", [])?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and every time a database is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, description, migrate) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        migrate(conn)?;
        mark_applied(conn, version, description)?;
        success(format!("Migration applied: {} → {}", version, description));
    }

    Ok(())
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    if !table_exists(conn, "log")? {
        return Ok(Vec::new());
    }

    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}
