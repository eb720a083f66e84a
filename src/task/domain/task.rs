//! Task entity and the request type used to create it.

use super::{TaskId, TaskPatch};
use chrono::{DateTime, SubsecRound, Utc};

/// Number of fractional-second digits kept on stored timestamps.
const TIMESTAMP_PRECISION_DIGITS: u16 = 3;

/// Truncates a timestamp to the millisecond precision kept in storage.
#[must_use]
pub fn to_stored_precision(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.trunc_subsecs(TIMESTAMP_PRECISION_DIGITS)
}

/// Request payload for creating a task.
///
/// Titles and descriptions are trimmed when the task is created. Length
/// constraints are not enforced here; run the validators in
/// [`super::validate_task_title`] and [`super::validate_task_description`]
/// before submitting a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Creates a draft with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }
}

/// A single tracked task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new, incomplete task from a draft.
    ///
    /// A description that is blank after trimming is dropped.
    #[must_use]
    pub fn create(id: TaskId, draft: TaskDraft, created_at: DateTime<Utc>) -> Self {
        let description = draft
            .description
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());

        Self {
            id,
            title: draft.title.trim().to_owned(),
            description,
            completed: false,
            created_at: to_stored_precision(created_at),
            due_date: draft.due_date.map(to_stored_precision),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            completed: data.completed,
            created_at: to_stored_precision(data.created_at),
            due_date: data.due_date.map(to_stored_precision),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Merges the fields present in `patch` into this task.
    ///
    /// The identifier and creation timestamp are never touched.
    pub fn apply(&mut self, patch: TaskPatch) {
        let (title, description, completed, due_date) = patch.into_parts();
        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_completed) = completed {
            self.completed = new_completed;
        }
        if let Some(new_due_date) = due_date {
            self.due_date = new_due_date.map(to_stored_precision);
        }
    }

    /// Flips the completion flag.
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Returns `true` when the due date falls on a calendar day (UTC) before
    /// the day of `now`.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date
            .is_some_and(|due| due.date_naive() < now.date_naive())
    }

    /// Returns `true` when the due date falls on the same calendar day (UTC)
    /// as `now`.
    #[must_use]
    pub fn is_due_today(&self, now: DateTime<Utc>) -> bool {
        self.due_date
            .is_some_and(|due| due.date_naive() == now.date_naive())
    }

    /// Returns `true` when the search term occurs in the title or
    /// description, ignoring case.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
    }
}
