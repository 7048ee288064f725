// Pure filtering over the task list

use crate::models::{Category, Task};
use chrono::{Datelike, Days, NaiveDate};
use clap::ValueEnum;

/// Completion-status component of a filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

/// Date-bucket component of a filter selection, evaluated against an
/// injected `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Tomorrow,
    Week,
    Month,
    Overdue,
}

/// The visible-subset selection. Transient UI state, never persisted.
///
/// `Default` keeps everything: all statuses, all categories, all dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub status: StatusFilter,
    /// `None` means all categories.
    pub category: Option<Category>,
    pub date: DateFilter,
}

/// Apply a selection to the task list.
///
/// Rules combine with AND; input order is preserved.
pub fn apply<'a>(
    tasks: &'a [Task],
    selection: &FilterSelection,
    today: NaiveDate,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| matches(task, selection, today))
        .collect()
}

fn matches(task: &Task, selection: &FilterSelection, today: NaiveDate) -> bool {
    let status_ok = match selection.status {
        StatusFilter::All => true,
        StatusFilter::Completed => task.completed,
        StatusFilter::Pending => !task.completed,
    };
    if !status_ok {
        return false;
    }

    if let Some(category) = selection.category {
        if task.category != category {
            return false;
        }
    }

    match selection.date {
        DateFilter::All => true,
        DateFilter::Today => task.raw_date == today,
        DateFilter::Tomorrow => task.raw_date == today + Days::new(1),
        DateFilter::Week => task.raw_date >= today && task.raw_date <= end_of_week(today),
        DateFilter::Month => task.raw_date >= today && task.raw_date <= end_of_month(today),
        DateFilter::Overdue => task.is_overdue(today),
    }
}

/// Last day of the current week. Weeks end on Saturday: the last day before
/// the next Sunday.
pub fn end_of_week(today: NaiveDate) -> NaiveDate {
    let days_left = 6 - u64::from(today.weekday().num_days_from_sunday());
    today + Days::new(days_left)
}

/// Last calendar day of `today`'s month.
pub fn end_of_month(today: NaiveDate) -> NaiveDate {
    let (year, month) = (today.year(), today.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next.and_then(|d| d.pred_opt()).unwrap_or(today)
}
