//! Core logic for the task list widget.
//! This crate is the single source of truth for task list invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::filter::Filter;
pub use model::task::{Task, TaskId, TaskValidationError};
pub use repo::task_repo::{
    decode_tasks, DecodedTasks, LoadIssue, RepoError, RepoResult, TaskListRepository,
    TASKS_STORAGE_KEY,
};
pub use service::events::{EventOutcome, RowAction, RowTarget, UiEvent};
pub use service::task_list_controller::{MutationOutcome, TaskListController};
pub use store::sqlite_store::DEFAULT_STORE_SCOPE;
pub use store::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult};
pub use view::{
    render, render_text, FilterControl, RenderTarget, SnapshotTarget, TaskListView, TaskRow,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
