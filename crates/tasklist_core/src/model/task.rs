//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record and its wire shape.
//! - Provide replacement-style update helpers.
//!
//! # Invariants
//! - `id` is stable and unique within one task list.
//! - `text` is never modified after construction.
//! - Toggling returns a new value instead of mutating in place.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one task.
///
/// Tasks created by this crate carry UUID v4 strings, but persisted ids are
/// accepted as arbitrary strings so older data keeps loading.
pub type TaskId = String;

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Lookup key for toggle/delete dispatch.
    pub id: TaskId,
    /// User supplied label.
    pub text: String,
    /// Completion flag, the only mutable aspect of a task.
    pub completed: bool,
}

/// Validation errors for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyId,
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id must not be empty"),
            Self::EmptyText => write!(f, "task text must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Creates an open task with a freshly generated id.
    ///
    /// The caller is responsible for trimming and rejecting empty input; this
    /// constructor stores `text` as given.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
        }
    }

    /// Creates a task with a caller-provided id.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is empty.
    /// - `EmptyText` when `text` is empty.
    pub fn with_id(
        id: impl Into<TaskId>,
        text: impl Into<String>,
        completed: bool,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id: id.into(),
            text: text.into(),
            completed,
        };
        task.validate()?;
        Ok(task)
    }

    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.text.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }

    /// Returns a replacement task with `completed` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
