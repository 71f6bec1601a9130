//! Plain-text painting of a rendered view.

use super::render::{TaskListView, EMPTY_STATE_TEXT};

/// Formats `view` for a terminal.
///
/// Layout: filter bar, then either rows or the empty placeholder, then the
/// counter. The active filter is bracketed with `*`.
pub fn render_text(view: &TaskListView) -> String {
    let mut out = String::new();

    let filter_bar = view
        .filters
        .iter()
        .map(|control| {
            if control.active {
                format!("[*{}*]", control.label)
            } else {
                format!("[{}]", control.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&filter_bar);
    out.push('\n');

    if !view.list_hidden {
        for row in &view.rows {
            let mark = if row.checked { 'x' } else { ' ' };
            out.push_str(&format!("[{mark}] {}  ({})\n", row.text, row.task_id));
        }
    }
    if !view.empty_state_hidden {
        out.push_str(EMPTY_STATE_TEXT);
        out.push('\n');
    }

    out.push_str(&view.counter_text);
    out.push('\n');
    out
}
