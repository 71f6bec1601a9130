//! FFI use-case API for the task list widget.
//!
//! # Responsibility
//! - Expose sync event entry points (submit, row click, filter, clear).
//! - Hold the one process-wide controller and return paintable snapshots.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Every call returns a full snapshot, so the UI repaints from one value.
//! - The active filter lives only in process memory.

use log::warn;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use tasklist_core::db::open_db;
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, EventOutcome, Filter,
    RowTarget, SnapshotTarget, SqliteKeyValueStore, TaskListController, TaskListRepository,
    TaskListView, UiEvent, DEFAULT_STORE_SCOPE,
};

const STORE_DB_FILE_NAME: &str = "tasklist_store.sqlite3";
const DB_PATH_ENV: &str = "TASKLIST_DB_PATH";
const STORE_SCOPE_ENV: &str = "TASKLIST_STORE_SCOPE";

type FfiController = TaskListController<SqliteKeyValueStore, SnapshotTarget>;

static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static CONTROLLER: Mutex<Option<FfiController>> = Mutex::new(None);

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowItem {
    pub task_id: String,
    pub text: String,
    pub checked: bool,
    pub checkbox_label: String,
}

/// One filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterItem {
    /// Stable id (`all|active|completed`).
    pub filter: String,
    pub label: String,
    pub active: bool,
}

/// Complete view state after a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListSnapshot {
    /// `false` when the call failed; `message` carries the reason.
    pub ok: bool,
    pub message: String,
    pub rows: Vec<TaskRowItem>,
    pub counter_text: String,
    pub list_hidden: bool,
    pub empty_state_hidden: bool,
    pub filters: Vec<FilterItem>,
    pub active_filter: String,
    /// Whether the UI should clear and refocus the add-task input.
    pub input_reset: bool,
}

impl TaskListSnapshot {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            rows: Vec::new(),
            counter_text: String::new(),
            list_hidden: true,
            empty_state_hidden: false,
            filters: Vec::new(),
            active_filter: Filter::All.as_str().to_string(),
            input_reset: false,
        }
    }
}

/// Returns the current view without changing anything.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_snapshot() -> TaskListSnapshot {
    with_controller("tasks_snapshot", |_| Ok(EventOutcome::Ignored))
}

/// Handles add-task form submission with the raw input value.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_submit(text: String) -> TaskListSnapshot {
    with_controller("tasks_submit", |controller| {
        controller.dispatch(UiEvent::SubmitTask { raw_text: text })
    })
}

/// Handles a click inside a task row.
///
/// `target` is one of `checkbox|delete|label|row`.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_row_click(task_id: String, target: String) -> TaskListSnapshot {
    let Some(target) = parse_row_target(&target) else {
        return with_controller("tasks_row_click", |_| Ok(EventOutcome::Ignored));
    };
    with_controller("tasks_row_click", |controller| {
        controller.dispatch(UiEvent::RowClicked { task_id, target })
    })
}

/// Handles filter control selection. Unknown ids leave the filter as is.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_select_filter(filter: String) -> TaskListSnapshot {
    let Some(filter) = Filter::parse(&filter) else {
        return with_controller("tasks_select_filter", |_| Ok(EventOutcome::Ignored));
    };
    with_controller("tasks_select_filter", |controller| {
        controller.dispatch(UiEvent::FilterSelected(filter))
    })
}

/// Handles the clear-completed control.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_clear_completed() -> TaskListSnapshot {
    with_controller("tasks_clear_completed", |controller| {
        controller.dispatch(UiEvent::ClearCompleted)
    })
}

fn parse_row_target(value: &str) -> Option<RowTarget> {
    match value.trim() {
        "checkbox" => Some(RowTarget::Checkbox),
        "delete" => Some(RowTarget::DeleteButton),
        "label" => Some(RowTarget::Label),
        "row" => Some(RowTarget::Row),
        _ => None,
    }
}

fn with_controller(
    call: &'static str,
    f: impl FnOnce(&mut FfiController) -> tasklist_core::RepoResult<EventOutcome>,
) -> TaskListSnapshot {
    let mut guard = CONTROLLER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    if guard.is_none() {
        match open_controller() {
            Ok(controller) => *guard = Some(controller),
            Err(err) => return TaskListSnapshot::failure(format!("{call} failed: {err}")),
        }
    }
    let Some(controller) = guard.as_mut() else {
        return TaskListSnapshot::failure(format!("{call} failed: controller unavailable"));
    };

    let resets_before = controller.target().input_reset_count();
    let result = f(controller);
    let input_reset = controller.target().input_reset_count() > resets_before;

    let (ok, message) = match result {
        Ok(EventOutcome::Applied) => (true, "Applied.".to_string()),
        Ok(EventOutcome::Ignored) => (true, String::new()),
        Err(err) => {
            warn!("event=ffi_call module=ffi status=error call={call} error={err}");
            (false, format!("{call} failed: {err}"))
        }
    };

    to_snapshot(
        &controller.view(),
        controller.active_filter(),
        ok,
        message,
        input_reset,
    )
}

fn open_controller() -> Result<FfiController, String> {
    let conn = open_db(resolve_store_db_path()).map_err(|err| format!("store open failed: {err}"))?;
    let store = SqliteKeyValueStore::new(conn, resolve_store_scope());
    TaskListController::open(TaskListRepository::new(store), SnapshotTarget::new())
        .map_err(|err| format!("task load failed: {err}"))
}

fn resolve_store_db_path() -> PathBuf {
    STORE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_DB_FILE_NAME)
        })
        .clone()
}

fn resolve_store_scope() -> String {
    std::env::var(STORE_SCOPE_ENV)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|scope| !scope.is_empty())
        .unwrap_or_else(|| DEFAULT_STORE_SCOPE.to_string())
}

fn to_snapshot(
    view: &TaskListView,
    active_filter: Filter,
    ok: bool,
    message: String,
    input_reset: bool,
) -> TaskListSnapshot {
    TaskListSnapshot {
        ok,
        message,
        rows: view
            .rows
            .iter()
            .map(|row| TaskRowItem {
                task_id: row.task_id.clone(),
                text: row.text.clone(),
                checked: row.checked,
                checkbox_label: row.checkbox_label.clone(),
            })
            .collect(),
        counter_text: view.counter_text.clone(),
        list_hidden: view.list_hidden,
        empty_state_hidden: view.empty_state_hidden,
        filters: view
            .filters
            .iter()
            .map(|control| FilterItem {
                filter: control.filter.as_str().to_string(),
                label: control.label.to_string(),
                active: control.active,
            })
            .collect(),
        active_filter: active_filter.as_str().to_string(),
        input_reset,
    }
}
