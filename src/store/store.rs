//! SQLite-backed drop store
//!
//! Each operation acquires its own connection and transaction; nothing is
//! shared across operations, which bounds resource usage to the number of
//! in-flight requests and leaves writer serialization to SQLite.

use std::path::PathBuf;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;

use super::drop::{DropId, DropSummary};
use super::errors::{StoreError, StoreResult};
use super::json::{deserialize_payload, serialize_payload, sql_to_time, time_to_sql};
use super::schema;

/// Handle on the drop database.
///
/// Holds only the database path; connections are opened per operation and
/// released, with commit, on every exit path. Cloning the handle is cheap
/// and safe to share across request tasks.
#[derive(Debug, Clone)]
pub struct DropStore {
    db_path: PathBuf,
}

impl DropStore {
    /// Create a store handle from the process configuration
    pub fn new(config: &Config) -> Self {
        Self {
            db_path: config.db_path().to_path_buf(),
        }
    }

    /// Open the per-operation connection
    fn connect(&self) -> StoreResult<Connection> {
        Ok(Connection::open(&self.db_path)?)
    }

    /// Ensure the drops table exists; safe to call repeatedly
    pub fn ensure_schema(&self) -> StoreResult<()> {
        let mut conn = self.connect()?;
        schema::ensure_schema(&mut conn)
    }

    /// List `{id, time}` summaries of all non-deleted drops
    pub fn list_active(&self) -> StoreResult<Vec<DropSummary>> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let drops = {
            let mut stmt = tx.prepare("SELECT id, time FROM drops WHERE deleted != 1")?;
            let rows = stmt.query_map([], |row| {
                Ok((row.get::<_, DropId>(0)?, row.get::<_, String>(1)?))
            })?;

            let mut drops = Vec::new();
            for row in rows {
                let (id, time) = row?;
                drops.push(DropSummary {
                    id,
                    time: sql_to_time(&time)?,
                });
            }
            drops
        };
        tx.commit()?;
        Ok(drops)
    }

    /// Fetch the payload of an active drop.
    ///
    /// Soft-deleted rows are invisible here: looking one up yields
    /// [`StoreError::NotFound`] even though the row persists.
    pub fn get(&self, id: DropId) -> StoreResult<Value> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let stored: Option<String> = tx
            .query_row(
                "SELECT json FROM drops WHERE id = ? AND deleted != 1",
                [id],
                |row| row.get(0),
            )
            .optional()?;
        tx.commit()?;

        match stored {
            Some(text) => Ok(deserialize_payload(&text)?),
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Store a new drop and return its assigned id.
    ///
    /// The payload is serialized before the connection is opened, so a
    /// serialization failure can never leave a partial row behind.
    pub fn create<T: Serialize>(&self, payload: &T) -> StoreResult<DropId> {
        let text = serialize_payload(payload)?;
        let time = time_to_sql(Utc::now());

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO drops (time, json, deleted) VALUES (?, ?, 0)",
            params![time, text],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        tracing::debug!(id, "drop created");
        Ok(id)
    }

    /// Mark the drop with the given id as deleted.
    ///
    /// Idempotent: a missing row or an already-deleted row is a success,
    /// and the target id is acknowledged either way.
    pub fn soft_delete(&self, id: DropId) -> StoreResult<DropId> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute("UPDATE drops SET deleted = 1 WHERE id = ?", [id])?;
        tx.commit()?;

        tracing::debug!(id, "drop soft-deleted");
        Ok(id)
    }
}
