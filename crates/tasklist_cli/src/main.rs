//! Terminal driver for the task list.
//!
//! # Responsibility
//! - Route one command per invocation through the core controller.
//! - Paint the resulting view as plain text.
//!
//! Store location comes from `TASKLIST_DB_PATH` / `TASKLIST_STORE_SCOPE`.
//! Logs go to `TASKLIST_LOG_DIR` when set.

mod cli;

use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use tasklist_core::db::open_db;
use tasklist_core::{
    default_log_level, init_logging, render_text, EventOutcome, Filter, SnapshotTarget,
    SqliteKeyValueStore, TaskListController, TaskListRepository, UiEvent, DEFAULT_STORE_SCOPE,
};

use crate::cli::Cli;

const STORE_DB_FILE_NAME: &str = "tasklist_store.sqlite3";

fn main() -> ExitCode {
    let cli = Cli::parse();
    let event = cli.command.and_then(|command| command.into_event());

    match run(cli.filter.into(), event) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(filter: Filter, event: Option<UiEvent>) -> Result<String, String> {
    init_logging_from_env();

    let conn = open_db(store_db_path()).map_err(|err| format!("store open failed: {err}"))?;
    let store = SqliteKeyValueStore::new(conn, store_scope());
    let mut controller =
        TaskListController::open(TaskListRepository::new(store), SnapshotTarget::new())
            .map_err(|err| format!("task load failed: {err}"))?;

    let mut notice = None;
    if let Some(event) = event {
        info!("event=cli_dispatch module=cli status=start filter={filter}");
        let outcome = controller.dispatch(event).map_err(|err| err.to_string())?;
        if outcome == EventOutcome::Ignored {
            notice = Some("nothing to do");
        }
    }
    controller.set_filter(filter);

    let mut output = render_text(&controller.view());
    if let Some(notice) = notice {
        output.push_str(notice);
        output.push('\n');
    }
    Ok(output)
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var("TASKLIST_LOG_DIR") else {
        return;
    };
    if let Err(err) = init_logging(default_log_level(), &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn store_db_path() -> PathBuf {
    std::env::var("TASKLIST_DB_PATH")
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(STORE_DB_FILE_NAME))
}

fn store_scope() -> String {
    std::env::var("TASKLIST_STORE_SCOPE")
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|scope| !scope.is_empty())
        .unwrap_or_else(|| DEFAULT_STORE_SCOPE.to_string())
}
