use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{get_entry, insert_entry, update_entry};
use crate::errors::AppResult;
use crate::models::{EntryForm, WorkEntry};
use crate::utils::date::to_db_date;
use crate::utils::time::{format_hm, to_db_time};
use chrono::NaiveDate;

/// High-level business logic for the `add` and `edit` commands.
pub struct AddLogic;

/// One-line description used in the internal log.
pub(crate) fn describe(e: &WorkEntry) -> String {
    format!(
        "{} {}-{} {} ({} h)",
        to_db_date(&e.date),
        to_db_time(&e.start_time),
        to_db_time(&e.end_time),
        e.entry_type.to_db_str(),
        format_hm(e.net_minutes()),
    )
}

impl AddLogic {
    /// Validate the form and store it as a new entry.
    pub fn apply(pool: &DbPool, form: &EntryForm, today: NaiveDate) -> AppResult<WorkEntry> {
        let mut entry = form.build(today)?;
        entry.id = insert_entry(&pool.conn, &entry)?;

        ttlog_quiet(
            &pool.conn,
            "add",
            &format!("#{}", entry.id),
            &describe(&entry),
        );

        Ok(entry)
    }

    /// Overlay the form on entry `id` and store the result.
    pub fn edit(pool: &DbPool, id: i64, form: &EntryForm) -> AppResult<WorkEntry> {
        let mut entry = get_entry(&pool.conn, id)?;
        let before = describe(&entry);

        form.apply_to(&mut entry)?;
        update_entry(&pool.conn, &entry)?;

        ttlog_quiet(
            &pool.conn,
            "edit",
            &format!("#{id}"),
            &format!("{before} => {}", describe(&entry)),
        );

        Ok(entry)
    }
}
