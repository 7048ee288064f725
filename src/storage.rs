// Durable slot persistence

use crate::models::Task;
use eyre::{Context, Result};
use fs2::FileExt;
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, warn};

/// Persistence port for the task list.
///
/// One slot holds the whole serialized task array; a write replaces the slot
/// contents all-or-nothing. Injected into the store so tests can swap in an
/// in-memory slot.
pub trait Storage {
    /// Read the slot. `None` means the slot has never been written.
    fn load(&self) -> Result<Option<Vec<Task>>>;

    /// Replace the slot contents with the given tasks.
    fn save(&mut self, tasks: &[Task]) -> Result<()>;
}

/// File-backed slot: a single JSON array on disk.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<Task>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path).context("Failed to read task slot")?;
        if raw.trim().is_empty() {
            warn!(file = ?self.path, "Task slot is blank, treating as unwritten");
            return Ok(None);
        }

        let tasks: Vec<Task> =
            serde_json::from_str(&raw).context("Task slot holds corrupt JSON")?;
        debug!(file = ?self.path, count = tasks.len(), "Loaded tasks from slot");
        Ok(Some(tasks))
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create slot directory")?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .context("Failed to open task slot for writing")?;

        // Acquire exclusive lock before writing
        file.lock_exclusive().context("Failed to acquire slot lock")?;

        let json = serde_json::to_string(tasks)?;
        writeln!(file, "{}", json)?;
        file.sync_all()?;

        // Lock is automatically released when file is dropped
        Ok(())
    }
}

/// In-memory slot for tests and embedding.
///
/// Clones share the same slot, so a handle kept by the caller observes what
/// the store persisted. Contents round-trip through an actual JSON string to
/// keep the serialized form honest.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw slot contents, exactly as a file-backed slot would hold them.
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<Task>>> {
        match &*self.slot.borrow() {
            Some(raw) => {
                let tasks = serde_json::from_str(raw).context("Task slot holds corrupt JSON")?;
                Ok(Some(tasks))
            }
            None => Ok(None),
        }
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        *self.slot.borrow_mut() = Some(serde_json::to_string(tasks)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::{NaiveDate, Utc};
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        let now = Utc::now();
        let mut done = Task::new(
            2,
            "Morning workout",
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            Category::Health,
            now,
        );
        done.completed = true;

        vec![
            Task::new(
                1,
                "Buy milk",
                NaiveDate::from_ymd_opt(2026, 8, 8).unwrap(),
                Category::Shopping,
                now,
            ),
            done,
        ]
    }

    #[test]
    fn test_file_slot_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut storage = JsonFileStorage::new(temp.path().join("tasks.json"));

        let tasks = sample_tasks();
        storage.save(&tasks).unwrap();

        // Field-for-field, order preserved
        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_file_slot_missing_reads_as_unwritten() {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp.path().join("nonexistent.json"));

        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_slot_blank_reads_as_unwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, "  \n").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_slot_corrupt_json_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, "{not an array}").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(storage.load().is_err());
    }

    #[test]
    fn test_file_slot_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/tasks.json");

        let mut storage = JsonFileStorage::new(&path);
        storage.save(&sample_tasks()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_memory_slot_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        let tasks = sample_tasks();
        storage.save(&tasks).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_memory_slot_shared_between_clones() {
        let handle = MemoryStorage::new();
        let mut writer = handle.clone();

        writer.save(&sample_tasks()).unwrap();
        assert!(handle.contents().is_some());
        assert_eq!(handle.load().unwrap().unwrap().len(), 2);
    }
}
