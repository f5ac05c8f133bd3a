//! Plain-text rendering of the task list view

use std::fmt::Write;

use tm_core::task::Task;

use crate::filter::StatusFilter;
use crate::state::TaskManagerState;

pub const EMPTY_LIST: &str = "No tasks found. Add your first task!";

/// Filter bar with per-status counts; the active filter is bracketed
pub fn filter_bar(state: &TaskManagerState) -> String {
    let counts = state.counts();
    StatusFilter::ALL
        .iter()
        .map(|filter| {
            let label = format!("{} ({})", filter.label(), counts.get(*filter));
            if *filter == state.status_filter() {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn task_card(out: &mut String, task: &Task) {
    let _ = writeln!(out, "- {}", task.title);
    if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "  {}", description);
    }
    let _ = writeln!(out, "  Status: {}", task.status);
    let _ = writeln!(out, "  id: {}", task.id);
}

pub fn render(state: &TaskManagerState) -> String {
    let mut out = String::from("Task Manager\n");

    if state.is_loading() {
        out.push_str("Loading...\n");
    }
    if let Some(error) = state.error_message() {
        let _ = writeln!(out, "Error: {}", error);
    }

    let _ = writeln!(out, "{}", filter_bar(state));
    if !state.search_text().trim().is_empty() {
        let _ = writeln!(out, "Search: {}", state.search_text());
    }
    out.push('\n');

    if state.visible_tasks().is_empty() {
        out.push_str(EMPTY_LIST);
        out.push('\n');
    } else {
        for task in state.visible_tasks() {
            task_card(&mut out, task);
        }
    }
    out
}
