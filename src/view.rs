// Display-model projection for presentation layers

use crate::filter::{FilterSelection, apply};
use crate::models::{Category, Task, TaskId};
use crate::store::Stats;
use chrono::NaiveDate;

/// One renderable row of the filtered task list.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub id: TaskId,
    pub text: String,
    /// Display-formatted due date, e.g. "Mon, Jan 26, 2026".
    pub date: String,
    pub category: Category,
    pub completed: bool,
    pub overdue: bool,
}

/// Why the row list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyHint {
    /// The store itself holds no tasks.
    NoTasks,
    /// Tasks exist but the current filters exclude all of them.
    NoMatches,
}

/// Everything a presentation layer needs to render one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    /// Filtered rows, input order preserved.
    pub rows: Vec<TaskView>,
    /// Aggregates over the unfiltered store.
    pub stats: Stats,
    pub count_text: String,
    pub empty: Option<EmptyHint>,
}

/// Project the store contents and a selection into a renderable model.
///
/// Pure: the caller injects `today`, so a given (tasks, selection, today)
/// always yields the same model.
pub fn project(tasks: &[Task], selection: &FilterSelection, today: NaiveDate) -> DisplayModel {
    let filtered = apply(tasks, selection, today);
    let stats = Stats::of(tasks);
    let count_text = count_text(filtered.len(), stats.total);

    let empty = if !filtered.is_empty() {
        None
    } else if tasks.is_empty() {
        Some(EmptyHint::NoTasks)
    } else {
        Some(EmptyHint::NoMatches)
    };

    let rows = filtered
        .into_iter()
        .map(|task| TaskView {
            id: task.id,
            text: task.text.clone(),
            date: task.date.clone(),
            category: task.category,
            completed: task.completed,
            overdue: task.is_overdue(today),
        })
        .collect();

    DisplayModel {
        rows,
        stats,
        count_text,
        empty,
    }
}

fn count_text(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "task" } else { "tasks" };
    if shown == 0 {
        "No tasks match your filters".to_string()
    } else if shown == total {
        format!("You have {total} {noun}")
    } else {
        format!("Showing {shown} of {total} {noun}")
    }
}
