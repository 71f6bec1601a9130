//! Pure render function over task list state.

use crate::model::filter::Filter;
use crate::model::task::{Task, TaskId};

/// Placeholder copy shown when no task is visible.
pub const EMPTY_STATE_TEXT: &str = "No tasks to show.";

/// One visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Back-reference used to dispatch row clicks.
    pub task_id: TaskId,
    /// Read-only label.
    pub text: String,
    /// Checkbox state; mirrors `Task::completed`.
    pub checked: bool,
    /// Accessible label for the checkbox.
    pub checkbox_label: String,
}

/// One filter control and whether it is marked active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterControl {
    pub filter: Filter,
    pub label: &'static str,
    pub active: bool,
}

/// Full paintable state of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    pub rows: Vec<TaskRow>,
    /// Counter over the whole list, not the filtered subset.
    pub counter_text: String,
    pub list_hidden: bool,
    pub empty_state_hidden: bool,
    pub filters: Vec<FilterControl>,
}

/// Renders `tasks` under `filter`.
///
/// Filtering preserves list order. The counter always reflects `tasks.len()`.
pub fn render(tasks: &[Task], filter: Filter) -> TaskListView {
    let rows = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .map(task_row)
        .collect::<Vec<_>>();

    let has_visible = !rows.is_empty();
    TaskListView {
        rows,
        counter_text: counter_text(tasks.len()),
        list_hidden: !has_visible,
        empty_state_hidden: has_visible,
        filters: Filter::ALL_FILTERS
            .iter()
            .map(|&candidate| FilterControl {
                filter: candidate,
                label: candidate.label(),
                active: candidate == filter,
            })
            .collect(),
    }
}

fn task_row(task: &Task) -> TaskRow {
    TaskRow {
        task_id: task.id.clone(),
        text: task.text.clone(),
        checked: task.completed,
        checkbox_label: format!("Mark {} as complete", task.text),
    }
}

fn counter_text(total: usize) -> String {
    format!("{total} tasks")
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::model::filter::Filter;
    use crate::model::task::Task;

    fn sample() -> Vec<Task> {
        vec![
            Task::with_id("done", "write report", true).unwrap(),
            Task::with_id("open", "buy milk", false).unwrap(),
        ]
    }

    #[test]
    fn active_filter_shows_only_open_tasks() {
        let view = render(&sample(), Filter::Active);
        let ids = view.rows.iter().map(|row| row.task_id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["open"]);
    }

    #[test]
    fn completed_filter_shows_only_done_tasks() {
        let view = render(&sample(), Filter::Completed);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].task_id, "done");
        assert!(view.rows[0].checked);
    }

    #[test]
    fn all_filter_preserves_order() {
        let view = render(&sample(), Filter::All);
        let ids = view.rows.iter().map(|row| row.task_id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["done", "open"]);
    }

    #[test]
    fn counter_counts_whole_list_under_any_filter() {
        let tasks = vec![Task::with_id("a", "a", true).unwrap()];
        let view = render(&tasks, Filter::Active);
        assert_eq!(view.counter_text, "1 tasks");
        assert!(view.rows.is_empty());
    }

    #[test]
    fn exactly_one_of_list_and_placeholder_is_visible() {
        let empty = render(&[], Filter::All);
        assert!(empty.list_hidden);
        assert!(!empty.empty_state_hidden);
        assert_eq!(empty.counter_text, "0 tasks");

        let filled = render(&sample(), Filter::All);
        assert!(!filled.list_hidden);
        assert!(filled.empty_state_hidden);
    }

    #[test]
    fn exactly_one_filter_control_is_active() {
        let view = render(&sample(), Filter::Completed);
        let active = view
            .filters
            .iter()
            .filter(|control| control.active)
            .map(|control| control.filter)
            .collect::<Vec<_>>();
        assert_eq!(active, vec![Filter::Completed]);
    }

    #[test]
    fn checkbox_label_names_the_task() {
        let view = render(&sample(), Filter::Active);
        assert_eq!(view.rows[0].checkbox_label, "Mark buy milk as complete");
    }
}
