//! Origin-scoped key-value storage contracts.
//!
//! # Responsibility
//! - Define the string key/value contract persisted task state relies on.
//! - Provide SQLite-backed and in-process implementations.
//!
//! # Invariants
//! - `set_item` overwrites prior content for the same key unconditionally.
//! - A missing key reads as `None`, never as an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory_store;
pub mod sqlite_store;

pub use memory_store::MemoryKeyValueStore;
pub use sqlite_store::SqliteKeyValueStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level key-value store failure.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Write rejected because the value exceeds the store quota.
    QuotaExceeded {
        key: String,
        value_bytes: usize,
        quota_bytes: usize,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::QuotaExceeded {
                key,
                value_bytes,
                quota_bytes,
            } => write!(
                f,
                "value for `{key}` is {value_bytes} bytes, exceeding quota of {quota_bytes} bytes"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String key-value store scoped to one storage origin.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove_item(&self, key: &str) -> StoreResult<()>;
}
