// Data models for TaskDeck

use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Task identifier: epoch milliseconds at creation, bumped by the store
/// when that would collide with an existing id.
pub type TaskId = i64;

/// A single to-do record.
///
/// Serializes with the persisted slot layout: camelCase keys, `rawDate` as an
/// ISO date string, `createdAt` as an ISO timestamp string. `raw_date` is the
/// canonical due date for every comparison; `date` is a display string
/// derived from it once, at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub date: String,
    pub raw_date: NaiveDate,
    pub category: Category,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a pending task, deriving the display date from `raw_date`.
    pub fn new(
        id: TaskId,
        text: impl Into<String>,
        raw_date: NaiveDate,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            date: format_display_date(raw_date),
            raw_date,
            category,
            completed: false,
            created_at,
        }
    }

    /// A task is overdue iff its due date is strictly before `today` and it
    /// is not completed. Independent of any filter selection.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.raw_date < today && !self.completed
    }
}

/// Task category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Shopping,
    Health,
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Format a due date for display, e.g. "Mon, Jan 26, 2026".
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_now_ms() {
        let ts = now_ms();
        assert!(ts > 0);
        // Should be reasonable timestamp (after year 2020)
        assert!(ts > 1_600_000_000_000);
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Work).unwrap();
        assert_eq!(json, "\"work\"");

        let json = serde_json::to_string(&Category::Shopping).unwrap();
        assert_eq!(json, "\"shopping\"");
    }

    #[test]
    fn test_display_date_format() {
        assert_eq!(format_display_date(date(2026, 1, 26)), "Mon, Jan 26, 2026");
        assert_eq!(format_display_date(date(2026, 8, 7)), "Fri, Aug 7, 2026");
    }

    #[test]
    fn test_task_slot_layout() {
        let task = Task::new(
            1700000000000,
            "Buy milk",
            date(2026, 8, 7),
            Category::Shopping,
            Utc::now(),
        );

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"rawDate\":\"2026-08-07\""));
        assert!(json.contains("\"createdAt\":"));
        assert!(json.contains("\"completed\":false"));
        assert!(json.contains("\"category\":\"shopping\""));
    }

    #[test]
    fn test_task_serialization_round_trip() {
        let task = Task::new(
            42,
            "Morning workout",
            date(2026, 8, 10),
            Category::Health,
            Utc::now(),
        );

        let json = serde_json::to_string(&task).unwrap();
        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, task);
    }

    #[test]
    fn test_is_overdue() {
        let today = date(2026, 8, 7);
        let mut task = Task::new(1, "Gym", date(2026, 8, 6), Category::Health, Utc::now());
        assert!(task.is_overdue(today));

        // Completed tasks are never overdue
        task.completed = true;
        assert!(!task.is_overdue(today));

        // Due today is not overdue
        let task = Task::new(2, "Buy milk", today, Category::Shopping, Utc::now());
        assert!(!task.is_overdue(today));
    }
}
