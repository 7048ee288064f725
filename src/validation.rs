// Input validation for new tasks

use crate::error::ValidationError;
use chrono::NaiveDate;

/// Minimum accepted task description length, after trimming.
pub const MIN_TEXT_LEN: usize = 3;

/// Check task text. Returns the trimmed text that would be stored.
///
/// Pure predicate: no side effects, no clock access.
pub fn validate_text(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if trimmed.chars().count() < MIN_TEXT_LEN {
        return Err(ValidationError::TooShort);
    }
    Ok(trimmed.to_string())
}

/// Check a due date against an injected `today`.
///
/// Date-only comparison, time-of-day ignored. `None` means the caller never
/// had a date to parse (the form field was left empty).
pub fn validate_date(
    due: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    let due = due.ok_or(ValidationError::Missing)?;
    if due < today {
        return Err(ValidationError::PastDate);
    }
    Ok(due)
}
