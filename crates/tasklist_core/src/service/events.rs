//! UI events consumed by the controller.
//!
//! Row clicks are routed through a `(task id, row target)` pair, so any host
//! toolkit can implement delegated click handling by tagging each row with
//! its task id and reporting which part of the row was hit.

use crate::model::filter::Filter;
use crate::model::task::TaskId;

/// Part of a rendered row that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Checkbox,
    DeleteButton,
    Label,
    /// Row padding or any element without its own action.
    Row,
}

/// Mutation a row click resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Toggle,
    Delete,
}

impl RowTarget {
    /// Resolves the row action for this click target.
    ///
    /// Returns `None` for targets that carry no action.
    pub fn action(self) -> Option<RowAction> {
        match self {
            Self::Checkbox => Some(RowAction::Toggle),
            Self::DeleteButton => Some(RowAction::Delete),
            Self::Label | Self::Row => None,
        }
    }
}

/// Input delivered by the view surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Add-task form submitted with the raw (untrimmed) input value.
    SubmitTask { raw_text: String },
    /// Click inside the task list container.
    RowClicked { task_id: TaskId, target: RowTarget },
    /// Filter control selected.
    FilterSelected(Filter),
    /// Clear-completed control activated.
    ClearCompleted,
}

/// Whether an event changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    Ignored,
}
