//! Domain model for the task collection.
//!
//! Tasks, their identifiers, partial updates, caller-facing validation, and
//! read-time queries. Nothing here performs I/O.

mod error;
mod ids;
mod patch;
mod query;
mod task;
mod validation;

pub use error::{ParseTaskFilterError, ParseTaskSortError, TaskValidationError};
pub use ids::TaskId;
pub use patch::TaskPatch;
pub use query::{TaskFilter, TaskQuery, TaskSort, TaskSummary};
pub use task::{PersistedTaskData, Task, TaskDraft, to_stored_precision};
pub use validation::{TaskLimits, validate_task_description, validate_task_title};
