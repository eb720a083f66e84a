//! Caller-facing validation of task input.
//!
//! The task store accepts whatever it is given. Callers that collect titles
//! and descriptions from people run these checks first and present the
//! resulting [`TaskValidationError`] instead of submitting the draft.

use super::TaskValidationError;

/// Length limits applied to task input, measured in characters.
///
/// # Examples
///
/// ```
/// use jotter::task::domain::TaskLimits;
///
/// let limits = TaskLimits::default();
/// assert_eq!(limits.title_min_chars, 2);
/// assert_eq!(limits.title_max_chars, 100);
/// assert_eq!(limits.description_max_chars, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLimits {
    /// Minimum trimmed title length.
    pub title_min_chars: usize,
    /// Maximum trimmed title length.
    pub title_max_chars: usize,
    /// Maximum description length.
    pub description_max_chars: usize,
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self {
            title_min_chars: 2,
            title_max_chars: 100,
            description_max_chars: 500,
        }
    }
}

/// Validates a task title after trimming surrounding whitespace.
///
/// # Errors
///
/// Returns [`TaskValidationError::EmptyTitle`] for blank input, or a length
/// error when the trimmed title falls outside `limits`.
pub fn validate_task_title(title: &str, limits: &TaskLimits) -> Result<(), TaskValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }

    let actual = trimmed.chars().count();
    if actual < limits.title_min_chars {
        return Err(TaskValidationError::TitleTooShort {
            min: limits.title_min_chars,
            actual,
        });
    }
    if actual > limits.title_max_chars {
        return Err(TaskValidationError::TitleTooLong {
            max: limits.title_max_chars,
            actual,
        });
    }
    Ok(())
}

/// Validates an optional task description.
///
/// # Errors
///
/// Returns [`TaskValidationError::DescriptionTooLong`] when the description
/// exceeds `limits`.
pub fn validate_task_description(
    description: &str,
    limits: &TaskLimits,
) -> Result<(), TaskValidationError> {
    let actual = description.chars().count();
    if actual > limits.description_max_chars {
        return Err(TaskValidationError::DescriptionTooLong {
            max: limits.description_max_chars,
            actual,
        });
    }
    Ok(())
}
