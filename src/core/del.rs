use crate::core::add::describe;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entry, get_entry};
use crate::errors::AppResult;
use crate::models::WorkEntry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete entry `id`, returning what was removed.
    pub fn apply(pool: &DbPool, id: i64) -> AppResult<WorkEntry> {
        let entry = get_entry(&pool.conn, id)?;
        delete_entry(&pool.conn, id)?;

        ttlog_quiet(&pool.conn, "del", &format!("#{id}"), &describe(&entry));
        Ok(entry)
    }
}
