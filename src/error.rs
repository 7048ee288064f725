// Typed recoverable errors

use crate::models::TaskId;
use thiserror::Error;

/// Rejection reasons for task input.
///
/// All variants are recoverable: the caller surfaces the message and the
/// store is left untouched. The messages are the user-facing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task description is required")]
    Empty,
    #[error("Task description must be at least 3 characters")]
    TooShort,
    #[error("Due date is required")]
    Missing,
    #[error("Due date cannot be in the past")]
    PastDate,
}

/// Returned when an operation names a task id that is not in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No task with id {id}")]
pub struct NotFoundError {
    pub id: TaskId,
}
