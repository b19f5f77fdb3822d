//! SQLite-backed key-value adapter.
//!
//! # Responsibility
//! - Persist collection blobs in the `kv_store` table.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - Construction rejects connections that have not been migrated, instead
//!   of masking missing schema as empty state.
//! - `set` is an upsert; the last write for a key wins.

use super::{StorageAdapter, StorageError, StorageResult};
use crate::db::migrations::latest_version;
use rusqlite::{params, Connection, OptionalExtension};

/// Durable adapter over a migrated SQLite connection.
pub struct SqliteKvStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStorage<'conn> {
    /// Wraps a connection after verifying its schema version.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the connection was not opened
    ///   through `db::open_db`/`open_db_in_memory`.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        let expected_version = latest_version();
        let actual_version =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        if actual_version != expected_version {
            return Err(StorageError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl StorageAdapter for SqliteKvStorage<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
