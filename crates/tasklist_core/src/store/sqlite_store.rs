//! SQLite-backed key-value store.
//!
//! Rows live in `kv_entries` keyed by `(scope, key)`. One store instance is
//! bound to exactly one scope, so two origins sharing a database file never
//! see each other's values.

use super::{KeyValueStore, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Scope used when the caller does not name an origin.
pub const DEFAULT_STORE_SCOPE: &str = "local";

/// Durable key-value store over a migrated SQLite connection.
pub struct SqliteKeyValueStore {
    conn: Connection,
    scope: String,
}

impl SqliteKeyValueStore {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: Connection, scope: impl Into<String>) -> Self {
        Self {
            conn,
            scope: scope.into(),
        }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE scope = ?1 AND key = ?2;",
                params![self.scope.as_str(), key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (scope, key, value)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (scope, key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![self.scope.as_str(), key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.conn.execute(
            "DELETE FROM kv_entries WHERE scope = ?1 AND key = ?2;",
            params![self.scope.as_str(), key],
        )?;
        Ok(())
    }
}
