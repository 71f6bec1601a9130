//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};
use tasklist_core::{Filter, RowTarget, UiEvent};

/// Add, complete, delete and filter short text tasks
#[derive(Debug, Parser)]
#[command(name = "tasklist", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Which tasks to show after the command runs (not remembered)
    #[arg(long, value_enum, global = true, default_value = "all")]
    pub filter: FilterArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    /// Every task
    All,
    /// Tasks not yet completed
    Active,
    /// Completed tasks only
    Completed,
}

impl From<FilterArg> for Filter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => Filter::All,
            FilterArg::Active => Filter::Active,
            FilterArg::Completed => Filter::Completed,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show tasks (default)
    List,
    /// Add a task; words are joined with single spaces
    Add {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Flip completion of a task
    Toggle { id: String },
    /// Delete a task
    Delete { id: String },
    /// Remove every completed task
    ClearCompleted,
}

impl Command {
    /// Maps the command onto the UI event it stands for. `List` has none.
    pub fn into_event(self) -> Option<UiEvent> {
        match self {
            Self::List => None,
            Self::Add { words } => Some(UiEvent::SubmitTask {
                raw_text: words.join(" "),
            }),
            Self::Toggle { id } => Some(UiEvent::RowClicked {
                task_id: id,
                target: RowTarget::Checkbox,
            }),
            Self::Delete { id } => Some(UiEvent::RowClicked {
                task_id: id,
                target: RowTarget::DeleteButton,
            }),
            Self::ClearCompleted => Some(UiEvent::ClearCompleted),
        }
    }
}
