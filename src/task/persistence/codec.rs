//! JSON encoding of the task collection.
//!
//! The snapshot is a JSON array of task records with camelCase keys.
//! Timestamps are RFC 3339 UTC strings carrying exactly three fractional
//! digits, for example `2023-01-01T00:00:00.000Z`. Years past 9999 carry an
//! explicit sign (`+10000-01-01T00:00:00.000Z`). Absent optional fields are
//! omitted rather than written as placeholders.

use super::CodecError;
use crate::task::domain::{PersistedTaskData, Task, TaskId};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Signed-year layout written by the RFC 3339 formatter outside 0000..=9999.
const EXTENDED_YEAR_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Wire representation of a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    id: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    completed: bool,
    created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<String>,
}

impl From<&Task> for StoredTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().as_str().to_owned(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            completed: task.is_completed(),
            created_at: format_timestamp(task.created_at()),
            due_date: task.due_date().map(format_timestamp),
        }
    }
}

impl TryFrom<StoredTask> for Task {
    type Error = CodecError;

    fn try_from(stored: StoredTask) -> Result<Self, Self::Error> {
        let created_at = parse_timestamp("createdAt", &stored.created_at)?;
        let due_date = stored
            .due_date
            .as_deref()
            .map(|value| parse_timestamp("dueDate", value))
            .transpose()?;

        Ok(Self::from_persisted(PersistedTaskData {
            id: TaskId::new(stored.id),
            title: stored.title,
            description: stored.description,
            completed: stored.completed,
            created_at,
            due_date,
        }))
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, CodecError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, EXTENDED_YEAR_FORMAT).map(|naive| naive.and_utc())
        })
        .map_err(|_| CodecError::InvalidTimestamp {
            field,
            value: value.to_owned(),
        })
}

/// Encodes the full collection as a snapshot blob.
///
/// # Errors
///
/// Returns [`CodecError::Json`] if serialization fails.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, CodecError> {
    let records: Vec<StoredTask> = tasks.iter().map(StoredTask::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Decodes a snapshot blob back into a collection, preserving order.
///
/// # Errors
///
/// Returns [`CodecError::Json`] for malformed JSON or missing fields and
/// [`CodecError::InvalidTimestamp`] for unparseable timestamps. A blob that
/// repeats an id is rejected with [`CodecError::DuplicateId`].
pub fn decode_tasks(blob: &str) -> Result<Vec<Task>, CodecError> {
    let records: Vec<StoredTask> = serde_json::from_str(blob)?;
    if let Some(id) = first_duplicate_id(&records) {
        return Err(CodecError::DuplicateId { id: id.to_owned() });
    }
    records.into_iter().map(Task::try_from).collect()
}

fn first_duplicate_id(records: &[StoredTask]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .map(|record| record.id.as_str())
        .find(|id| !seen.insert(*id))
}
