// TaskDeck - Local task list with filtering, stats, and a durable JSON slot

pub mod error;
pub mod filter;
pub mod models;
pub mod storage;
pub mod store;
pub mod validation;
pub mod view;

// Re-export main types for convenience
pub use error::{NotFoundError, ValidationError};
pub use filter::{DateFilter, FilterSelection, StatusFilter, apply};
pub use models::{Category, Task, TaskId, now_ms};
pub use storage::{JsonFileStorage, MemoryStorage, Storage};
pub use store::{Stats, TaskStore};
pub use validation::{validate_date, validate_text};
pub use view::{DisplayModel, EmptyHint, TaskView, project};
