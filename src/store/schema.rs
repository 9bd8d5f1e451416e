//! Schema management for the drops table
//!
//! The table is brought into existence before first use; re-running the
//! ensure step against an existing database is a no-op.

use rusqlite::Connection;

use super::errors::StoreResult;

/// AUTOINCREMENT forbids rowid reuse, and rows are never physically
/// removed, so ids stay unique for the lifetime of the database.
const CREATE_DROPS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS drops (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    time TEXT NOT NULL,
    json TEXT NOT NULL,
    deleted INTEGER NOT NULL DEFAULT 0
)";

/// Ensure the drops table exists, idempotently
pub fn ensure_schema(conn: &mut Connection) -> StoreResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(CREATE_DROPS_TABLE)?;
    tx.commit()?;
    Ok(())
}
