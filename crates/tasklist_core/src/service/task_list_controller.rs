//! Task list controller.
//!
//! # Responsibility
//! - Hold the single owned copy of the task list and the active filter.
//! - Apply mutations as `update -> save -> paint` units.
//! - Translate `UiEvent`s into mutations.
//!
//! # Invariants
//! - New tasks are prepended; the list is otherwise never reordered.
//! - Task ids stay unique because ids are only ever generated or loaded
//!   through de-duplication.
//! - Updates replace the list instead of editing tasks in place.
//! - A failed save is logged and returned, but the in-memory mutation and
//!   repaint still happen; nothing here panics.

use crate::model::filter::Filter;
use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoResult, TaskListRepository};
use crate::service::events::{EventOutcome, RowAction, UiEvent};
use crate::store::KeyValueStore;
use crate::view::{render, RenderTarget, TaskListView};
use log::{debug, error, info};

/// Result of a bulk mutation that may turn out to be a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// List changed; store written and view repainted.
    Changed { removed: usize },
    /// Nothing to do; store and view were left alone.
    Unchanged,
}

/// Owner of task list state, wired to one store and one render target.
pub struct TaskListController<S: KeyValueStore, V: RenderTarget> {
    repo: TaskListRepository<S>,
    target: V,
    tasks: Vec<Task>,
    active_filter: Filter,
}

impl<S: KeyValueStore, V: RenderTarget> TaskListController<S, V> {
    /// Loads persisted tasks, resets the filter to `All` and paints once.
    ///
    /// # Errors
    /// - Returns the repository error when the store cannot be read.
    pub fn open(repo: TaskListRepository<S>, target: V) -> RepoResult<Self> {
        let tasks = repo.load()?;
        let mut controller = Self {
            repo,
            target,
            tasks,
            active_filter: Filter::All,
        };
        controller.repaint();
        info!(
            "event=controller_open module=service status=ok count={}",
            controller.tasks.len()
        );
        Ok(controller)
    }

    /// Current list, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    /// Renders the current state without painting it.
    pub fn view(&self) -> TaskListView {
        render(&self.tasks, self.active_filter)
    }

    pub fn repository(&self) -> &TaskListRepository<S> {
        &self.repo
    }

    pub fn target(&self) -> &V {
        &self.target
    }

    /// Prepends a new open task and returns its id.
    ///
    /// `text` is stored as given; callers trim and reject empty input.
    pub fn add_task(&mut self, text: &str) -> RepoResult<TaskId> {
        let task = Task::new(text);
        let id = task.id.clone();

        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.push(task);
        next.extend(self.tasks.iter().cloned());

        info!("event=task_add module=service status=ok task_id={id}");
        self.commit(next, "task_add")?;
        Ok(id)
    }

    /// Flips completion of the task with `id`.
    ///
    /// An unknown id leaves the list unchanged; it is still saved and
    /// repainted.
    pub fn toggle_task_completion(&mut self, id: &str) -> RepoResult<()> {
        let next = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    task.toggled()
                } else {
                    task.clone()
                }
            })
            .collect::<Vec<_>>();

        debug!("event=task_toggle module=service status=ok task_id={id}");
        self.commit(next, "task_toggle")
    }

    /// Removes the task with `id`; an unknown id is a silent no-op.
    pub fn delete_task(&mut self, id: &str) -> RepoResult<()> {
        let next = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect::<Vec<_>>();

        debug!("event=task_delete module=service status=ok task_id={id}");
        self.commit(next, "task_delete")
    }

    /// Removes every completed task.
    ///
    /// When nothing is completed this skips save and repaint entirely.
    pub fn clear_completed_tasks(&mut self) -> RepoResult<MutationOutcome> {
        if !self.tasks.iter().any(|task| task.completed) {
            debug!("event=tasks_clear_completed module=service status=skipped removed=0");
            return Ok(MutationOutcome::Unchanged);
        }

        let next = self
            .tasks
            .iter()
            .filter(|task| !task.completed)
            .cloned()
            .collect::<Vec<_>>();
        let removed = self.tasks.len() - next.len();

        info!("event=tasks_clear_completed module=service status=ok removed={removed}");
        self.commit(next, "tasks_clear_completed")?;
        Ok(MutationOutcome::Changed { removed })
    }

    /// Switches the active filter and repaints. Never persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        self.active_filter = filter;
        debug!("event=filter_select module=service status=ok filter={filter}");
        self.repaint();
    }

    /// Routes one UI event.
    pub fn dispatch(&mut self, event: UiEvent) -> RepoResult<EventOutcome> {
        match event {
            UiEvent::SubmitTask { raw_text } => {
                let text = raw_text.trim();
                if text.is_empty() {
                    return Ok(EventOutcome::Ignored);
                }
                let added = self.add_task(text);
                self.target.reset_input();
                added.map(|_| EventOutcome::Applied)
            }
            UiEvent::RowClicked { task_id, target } => match target.action() {
                Some(RowAction::Toggle) => self
                    .toggle_task_completion(&task_id)
                    .map(|()| EventOutcome::Applied),
                Some(RowAction::Delete) => {
                    self.delete_task(&task_id).map(|()| EventOutcome::Applied)
                }
                None => Ok(EventOutcome::Ignored),
            },
            UiEvent::FilterSelected(filter) => {
                self.set_filter(filter);
                Ok(EventOutcome::Applied)
            }
            UiEvent::ClearCompleted => match self.clear_completed_tasks()? {
                MutationOutcome::Changed { .. } => Ok(EventOutcome::Applied),
                MutationOutcome::Unchanged => Ok(EventOutcome::Ignored),
            },
        }
    }

    fn commit(&mut self, next: Vec<Task>, event: &'static str) -> RepoResult<()> {
        self.tasks = next;
        let saved = self.repo.save(&self.tasks);
        self.repaint();

        if let Err(err) = &saved {
            error!(
                "event={} module=service status=error error_code=tasks_save_failed count={} error={}",
                event,
                self.tasks.len(),
                err
            );
        }
        saved
    }

    fn repaint(&mut self) {
        let view = render(&self.tasks, self.active_filter);
        self.target.paint(&view);
    }
}
