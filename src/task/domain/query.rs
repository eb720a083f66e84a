//! Read-time filtering, ordering, and summaries over a task collection.
//!
//! None of this touches the stored order; queries copy the matching tasks.

use super::{ParseTaskFilterError, ParseTaskSortError, Task};
use std::cmp::Ordering;

/// Completion filter applied to a task listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks that are not completed.
    Pending,
    /// Completed tasks.
    Completed,
}

impl TaskFilter {
    /// Returns the canonical key for this filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` when `task` passes this filter.
    #[must_use]
    pub const fn accepts(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.is_completed(),
            Self::Completed => task.is_completed(),
        }
    }
}

impl TryFrom<&str> for TaskFilter {
    type Error = ParseTaskFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskFilterError(value.to_owned())),
        }
    }
}

/// Ordering applied to a task listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskSort {
    /// Newest tasks first.
    #[default]
    Created,
    /// Earliest due date first; tasks without a due date go last.
    Due,
    /// Alphabetical by title, ignoring case.
    Title,
}

impl TaskSort {
    /// Returns the canonical key for this ordering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Due => "due",
            Self::Title => "title",
        }
    }

    fn compare(self, left: &Task, right: &Task) -> Ordering {
        match self {
            Self::Created => right.created_at().cmp(&left.created_at()),
            Self::Due => match (left.due_date(), right.due_date()) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::Title => left
                .title()
                .to_lowercase()
                .cmp(&right.title().to_lowercase()),
        }
    }
}

impl TryFrom<&str> for TaskSort {
    type Error = ParseTaskSortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "created" => Ok(Self::Created),
            "due" => Ok(Self::Due),
            "title" => Ok(Self::Title),
            _ => Err(ParseTaskSortError(value.to_owned())),
        }
    }
}

/// Search, filter, and ordering settings for a task listing.
///
/// # Examples
///
/// ```
/// use jotter::task::domain::{TaskFilter, TaskQuery, TaskSort};
///
/// let query = TaskQuery::new()
///     .with_search("milk")
///     .with_filter(TaskFilter::Pending)
///     .with_sort(TaskSort::Title);
/// assert_eq!(query.filter(), TaskFilter::Pending);
/// assert!(query.apply(&[]).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    search: Option<String>,
    filter: TaskFilter,
    sort: TaskSort,
}

impl TaskQuery {
    /// Creates a query that lists every task, newest first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to tasks whose title or description contains
    /// `term`, ignoring case. A blank term matches everything.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let raw = term.into();
        self.search = Some(raw.trim().to_owned()).filter(|text| !text.is_empty());
        self
    }

    /// Sets the completion filter.
    #[must_use]
    pub const fn with_filter(mut self, filter: TaskFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the ordering.
    #[must_use]
    pub const fn with_sort(mut self, sort: TaskSort) -> Self {
        self.sort = sort;
        self
    }

    /// Returns the search term, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the completion filter.
    #[must_use]
    pub const fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Returns the ordering.
    #[must_use]
    pub const fn sort(&self) -> TaskSort {
        self.sort
    }

    /// Returns the matching tasks in the requested order.
    ///
    /// Sorting is stable, so tasks that compare equal keep their stored order.
    #[must_use]
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let mut matching: Vec<Task> = tasks
            .iter()
            .filter(|task| self.filter.accepts(task))
            .filter(|task| {
                self.search
                    .as_deref()
                    .is_none_or(|term| task.matches_search(term))
            })
            .cloned()
            .collect();
        matching.sort_by(|left, right| self.sort.compare(left, right));
        matching
    }
}

/// Completion counts over a task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
    /// Number of tasks.
    pub total: usize,
    /// Number of tasks not yet completed.
    pub pending: usize,
    /// Number of completed tasks.
    pub completed: usize,
}

impl TaskSummary {
    /// Counts the tasks in `tasks`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        Self {
            total: tasks.len(),
            pending: tasks.len().saturating_sub(completed),
            completed,
        }
    }
}
