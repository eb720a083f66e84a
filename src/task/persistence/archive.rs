//! Snapshot load, save, and clear against a key-value store.

use super::{LoadError, PersistenceError, decode_tasks, encode_tasks};
use crate::task::{domain::Task, ports::KeyValueStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key used for the task snapshot unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "todo_tasks";

/// Reads and writes the full task collection under a single key.
#[derive(Debug)]
pub struct TaskArchive<K>
where
    K: KeyValueStore,
{
    store: Arc<K>,
    key: String,
}

impl<K> Clone for TaskArchive<K>
where
    K: KeyValueStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key.clone(),
        }
    }
}

impl<K> TaskArchive<K>
where
    K: KeyValueStore,
{
    /// Creates an archive that stores the snapshot under `key`.
    #[must_use]
    pub fn new(store: Arc<K>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Creates an archive that stores the snapshot under
    /// [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn with_default_key(store: Arc<K>) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored collection, reporting why a load failed.
    ///
    /// A missing snapshot yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Read`] when the store cannot be read and
    /// [`LoadError::Decode`] when the stored blob is malformed.
    pub async fn try_load(&self) -> Result<Vec<Task>, LoadError> {
        let blob = self.store.get(&self.key).await.map_err(LoadError::Read)?;
        match blob {
            Some(contents) => decode_tasks(&contents).map_err(LoadError::Decode),
            None => Ok(Vec::new()),
        }
    }

    /// Loads the stored collection, degrading to an empty collection on any
    /// failure.
    pub async fn load(&self) -> Vec<Task> {
        match self.try_load().await {
            Ok(tasks) => {
                debug!(
                    target: "jotter::persistence",
                    key = %self.key,
                    task_count = tasks.len(),
                    "loaded task snapshot"
                );
                tasks
            }
            Err(err) => {
                warn!(
                    target: "jotter::persistence",
                    key = %self.key,
                    %err,
                    "task snapshot unavailable, starting with an empty collection"
                );
                Vec::new()
            }
        }
    }

    /// Writes the full collection, replacing the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Encode`] if the collection cannot be
    /// encoded or [`PersistenceError::Write`] if the store rejects the write.
    /// Failed writes are not retried.
    pub async fn save(&self, tasks: &[Task]) -> Result<(), PersistenceError> {
        let blob = encode_tasks(tasks).map_err(PersistenceError::Encode)?;
        self.store
            .set(&self.key, &blob)
            .await
            .map_err(PersistenceError::Write)?;
        debug!(
            target: "jotter::persistence",
            key = %self.key,
            task_count = tasks.len(),
            "saved task snapshot"
        );
        Ok(())
    }

    /// Removes the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Clear`] if the store rejects the removal.
    pub async fn clear(&self) -> Result<(), PersistenceError> {
        self.store
            .remove(&self.key)
            .await
            .map_err(PersistenceError::Clear)
    }
}
