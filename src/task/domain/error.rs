//! Error types for task validation and read-time query parsing.

use thiserror::Error;

/// Errors returned by the caller-facing task input validators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is empty after trimming.
    #[error("task title is required")]
    EmptyTitle,

    /// The trimmed title is shorter than the configured minimum.
    #[error("task title must be at least {min} characters long, got {actual}")]
    TitleTooShort {
        /// Minimum accepted length in characters.
        min: usize,
        /// Actual trimmed length in characters.
        actual: usize,
    },

    /// The trimmed title is longer than the configured maximum.
    #[error("task title must be at most {max} characters long, got {actual}")]
    TitleTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Actual trimmed length in characters.
        actual: usize,
    },

    /// The description is longer than the configured maximum.
    #[error("task description must be at most {max} characters long, got {actual}")]
    DescriptionTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Actual length in characters.
        actual: usize,
    },
}

/// Error returned while parsing a completion filter key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task filter: {0}")]
pub struct ParseTaskFilterError(pub String);

/// Error returned while parsing a sort key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task sort order: {0}")]
pub struct ParseTaskSortError(pub String);
