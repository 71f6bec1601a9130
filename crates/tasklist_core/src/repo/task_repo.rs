//! Task list repository over a `KeyValueStore`.
//!
//! # Responsibility
//! - Decode the persisted JSON array into shape-checked tasks.
//! - Serialize and overwrite the full list on every save.
//!
//! # Invariants
//! - Loaded ids are unique; later duplicates are dropped.
//! - Extra fields on persisted records are tolerated and discarded.

use crate::model::task::Task;
use crate::store::{KeyValueStore, StoreError};
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key holding the serialized task list.
pub const TASKS_STORAGE_KEY: &str = "todo-list-tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task list persistence.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task list: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Non-fatal problems found while decoding persisted tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadIssue {
    /// Stored value is not valid JSON, or not a JSON array.
    PersistedDataCorrupt { reason: String },
    /// Individual records failed shape validation and were dropped.
    ValidationSkipped { dropped: usize },
}

/// Outcome of decoding one persisted value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedTasks {
    pub tasks: Vec<Task>,
    pub issues: Vec<LoadIssue>,
}

/// Decodes a raw persisted value into tasks.
///
/// Never fails: corrupt input yields an empty list with a
/// `PersistedDataCorrupt` issue, and each record lacking string `id`, string
/// `text` or boolean `completed` is dropped. Only field types are checked;
/// empty strings load as-is so the next save does not erase them.
pub fn decode_tasks(raw: &str) -> DecodedTasks {
    if raw.is_empty() {
        return DecodedTasks::default();
    }

    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            return DecodedTasks {
                tasks: Vec::new(),
                issues: vec![LoadIssue::PersistedDataCorrupt {
                    reason: format!("invalid json: {err}"),
                }],
            };
        }
    };

    let records = match parsed {
        Value::Array(records) => records,
        other => {
            return DecodedTasks {
                tasks: Vec::new(),
                issues: vec![LoadIssue::PersistedDataCorrupt {
                    reason: format!("expected array, found {}", json_kind(&other)),
                }],
            };
        }
    };

    let total = records.len();
    let mut seen = HashSet::with_capacity(total);
    let tasks = records
        .into_iter()
        .filter_map(|record| serde_json::from_value::<Task>(record).ok())
        .filter(|task| seen.insert(task.id.clone()))
        .collect::<Vec<_>>();

    let dropped = total - tasks.len();
    let issues = if dropped > 0 {
        vec![LoadIssue::ValidationSkipped { dropped }]
    } else {
        Vec::new()
    };

    DecodedTasks { tasks, issues }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Loads and saves the task list under `TASKS_STORAGE_KEY`.
pub struct TaskListRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TaskListRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads persisted tasks.
    ///
    /// Absent or corrupt data yields an empty list. Corruption is logged at
    /// `warn`; dropped records at `debug`.
    ///
    /// # Errors
    /// - Returns `RepoError::Store` when the store itself cannot be read.
    pub fn load(&self) -> RepoResult<Vec<Task>> {
        let Some(raw) = self.store.get_item(TASKS_STORAGE_KEY)? else {
            info!("event=tasks_load module=repo status=ok source=absent count=0");
            return Ok(Vec::new());
        };

        let decoded = decode_tasks(&raw);
        for issue in &decoded.issues {
            match issue {
                LoadIssue::PersistedDataCorrupt { reason } => warn!(
                    "event=tasks_load module=repo status=degraded error_code=persisted_data_corrupt error={}",
                    reason
                ),
                LoadIssue::ValidationSkipped { dropped } => debug!(
                    "event=tasks_load module=repo status=degraded error_code=validation_skipped dropped={}",
                    dropped
                ),
            }
        }
        info!(
            "event=tasks_load module=repo status=ok source=store count={}",
            decoded.tasks.len()
        );
        Ok(decoded.tasks)
    }

    /// Serializes `tasks` and overwrites the stored value.
    pub fn save(&self, tasks: &[Task]) -> RepoResult<()> {
        let encoded = serde_json::to_string(tasks)?;
        self.store.set_item(TASKS_STORAGE_KEY, &encoded)?;
        debug!(
            "event=tasks_save module=repo status=ok count={} bytes={}",
            tasks.len(),
            encoded.len()
        );
        Ok(())
    }
}
