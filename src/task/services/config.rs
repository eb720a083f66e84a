//! Configuration for the task store.

use crate::task::{
    persistence::{DEFAULT_STORAGE_KEY, TaskArchive},
    ports::KeyValueStore,
};
use std::sync::Arc;

/// Settings used when wiring a [`super::TaskStore`] to a key-value store.
///
/// # Examples
///
/// ```
/// use jotter::task::services::TaskStoreConfig;
///
/// let config = TaskStoreConfig::default();
/// assert_eq!(config.storage_key, "todo_tasks");
///
/// let scoped = TaskStoreConfig::default().with_storage_key("work_tasks");
/// assert_eq!(scoped.storage_key, "work_tasks");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStoreConfig {
    /// Key under which the task snapshot is stored.
    pub storage_key: String,
}

impl Default for TaskStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

impl TaskStoreConfig {
    /// Overrides the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Builds the snapshot archive for `store` using these settings.
    #[must_use]
    pub fn archive<K>(&self, store: Arc<K>) -> TaskArchive<K>
    where
        K: KeyValueStore,
    {
        TaskArchive::new(store, self.storage_key.clone())
    }
}
