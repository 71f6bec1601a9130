//! View filter over the task list.
//!
//! The filter is process-wide UI state. It is never persisted and never
//! changes list contents or order.

use super::task::Task;
use std::fmt::{Display, Formatter};

/// Stable id for the `all` filter control.
pub const FILTER_ALL: &str = "all";
/// Stable id for the `active` filter control.
pub const FILTER_ACTIVE: &str = "active";
/// Stable id for the `completed` filter control.
pub const FILTER_COMPLETED: &str = "completed";

/// Predicate selecting which tasks are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in control display order.
    pub const ALL_FILTERS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Stable string id used by filter controls.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => FILTER_ALL,
            Self::Active => FILTER_ACTIVE,
            Self::Completed => FILTER_COMPLETED,
        }
    }

    /// Human-readable control label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Parses a control id. Input is trimmed and matched case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            FILTER_ALL => Some(Self::All),
            FILTER_ACTIVE => Some(Self::Active),
            FILTER_COMPLETED => Some(Self::Completed),
            _ => None,
        }
    }

    /// Returns whether `task` is visible under this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
