//! Render engine and view surface contract.
//!
//! # Responsibility
//! - Turn `(tasks, filter)` into a paintable view model.
//! - Define the render target the controller paints into.
//!
//! # Invariants
//! - Rendering is a pure function of its inputs.
//! - Exactly one of list container and empty placeholder is visible.

pub mod render;
pub mod text;

pub use render::{render, FilterControl, TaskListView, TaskRow, EMPTY_STATE_TEXT};
pub use text::render_text;

/// Output side of the view surface.
pub trait RenderTarget {
    /// Replaces everything shown with `view`.
    fn paint(&mut self, view: &TaskListView);

    /// Clears the add-task input and returns focus to it.
    fn reset_input(&mut self);
}

/// Render target that keeps the most recent view.
///
/// Used by hosts that pull snapshots instead of receiving pushes.
#[derive(Debug, Default)]
pub struct SnapshotTarget {
    last: Option<TaskListView>,
    paints: usize,
    input_resets: usize,
}

impl SnapshotTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently painted view, if any.
    pub fn last_view(&self) -> Option<&TaskListView> {
        self.last.as_ref()
    }

    pub fn paint_count(&self) -> usize {
        self.paints
    }

    pub fn input_reset_count(&self) -> usize {
        self.input_resets
    }
}

impl RenderTarget for SnapshotTarget {
    fn paint(&mut self, view: &TaskListView) {
        self.last = Some(view.clone());
        self.paints += 1;
    }

    fn reset_input(&mut self) {
        self.input_resets += 1;
    }
}
