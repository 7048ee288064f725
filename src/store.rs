// Task store: the authoritative task list and its persistence discipline

use crate::error::NotFoundError;
use crate::models::{Category, Task, TaskId, now_ms};
use crate::storage::Storage;
use crate::validation::{validate_date, validate_text};
use chrono::{Days, NaiveDate, Utc};
use eyre::Result;
use tracing::{debug, info};

/// Aggregate counts over the unfiltered store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl Stats {
    /// Aggregate over a task list. `pending` is always `total - completed`.
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}

/// The authoritative task list.
///
/// Owns the tasks in insertion order and persists the whole list through the
/// injected storage port after every mutation. Single logical actor; no
/// locking inside the store.
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Box<dyn Storage>,
}

impl TaskStore {
    /// Open the store, loading the task list from the slot.
    ///
    /// An empty or never-written slot falls back to the fixed sample set,
    /// which is persisted immediately so the next open reads it back.
    pub fn open(storage: Box<dyn Storage>, today: NaiveDate) -> Result<Self> {
        match storage.load()? {
            Some(tasks) if !tasks.is_empty() => {
                debug!(count = tasks.len(), "Loaded task list from slot");
                Ok(Self { tasks, storage })
            }
            _ => {
                info!("Slot is empty, seeding sample tasks");
                let mut store = Self {
                    tasks: seed_tasks(today),
                    storage,
                };
                store.persist()?;
                Ok(store)
            }
        }
    }

    // ========================================================================
    // Mutations (each one persists)
    // ========================================================================

    /// Validate and append a new pending task.
    ///
    /// Rejection is atomic: on any `ValidationError` the list and the slot
    /// are left exactly as they were. Returns a clone of the created task.
    pub fn add(
        &mut self,
        text: &str,
        due: Option<NaiveDate>,
        category: Category,
        today: NaiveDate,
    ) -> Result<Task> {
        let text = validate_text(text)?;
        let due = validate_date(due, today)?;

        let task = Task::new(self.next_id(), text, due, category, Utc::now());
        self.tasks.push(task.clone());
        self.persist()?;

        debug!(id = task.id, "Added task");
        Ok(task)
    }

    /// Flip a task between completed and pending.
    ///
    /// Fails with [`NotFoundError`] if the id is absent.
    pub fn toggle_complete(&mut self, id: TaskId) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(NotFoundError { id })?;
        task.completed = !task.completed;
        let updated = task.clone();
        self.persist()?;

        debug!(id, completed = updated.completed, "Toggled task");
        Ok(updated)
    }

    /// Remove one task by id. A missing id is a silent no-op, not an error.
    pub fn delete_one(&mut self, id: TaskId) -> Result<()> {
        self.tasks.retain(|t| t.id != id);
        self.persist()
    }

    /// Remove every completed task. Returns the count removed; the slot is
    /// rewritten only when something was actually removed.
    pub fn delete_completed(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();

        if removed > 0 {
            self.persist()?;
            info!(removed, "Deleted completed tasks");
        }
        Ok(removed)
    }

    /// Clear the store unconditionally.
    pub fn delete_all(&mut self) -> Result<()> {
        self.tasks.clear();
        self.persist()?;
        info!("Deleted all tasks");
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All tasks in insertion order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Aggregate counts over the unfiltered store.
    pub fn stats(&self) -> Stats {
        Stats::of(&self.tasks)
    }

    /// Next unique id: current epoch millis, bumped past the maximum id in
    /// the store so same-millisecond adds cannot collide.
    fn next_id(&self) -> TaskId {
        let id = now_ms();
        match self.tasks.iter().map(|t| t.id).max() {
            Some(max) if id <= max => max + 1,
            _ => id,
        }
    }

    fn persist(&mut self) -> Result<()> {
        self.storage.save(&self.tasks)
    }
}

/// Fixed sample set used when the slot has never been written.
fn seed_tasks(today: NaiveDate) -> Vec<Task> {
    let now = Utc::now();
    let tomorrow = today + Days::new(1);

    let mut workout = Task::new(3, "Morning workout", today, Category::Health, now);
    workout.completed = true;

    vec![
        Task::new(1, "Finish quarterly report", today, Category::Work, now),
        Task::new(2, "Buy groceries", tomorrow, Category::Shopping, now),
        workout,
    ]
}
