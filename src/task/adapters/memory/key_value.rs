//! In-memory key-value store for tests and ephemeral sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{KeyValueError, KeyValueResult, KeyValueStore};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep one handle for
/// inspection while the task store writes through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<InMemoryKeyValueState>>,
}

#[derive(Debug, Default)]
struct InMemoryKeyValueState {
    entries: HashMap<String, String>,
    writes: usize,
}

impl InMemoryKeyValueStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `value` under `key`.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            state: Arc::new(RwLock::new(InMemoryKeyValueState { entries, writes: 0 })),
        }
    }

    /// Returns how many `set` and `remove` calls have completed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError::Backend`] if the state lock is poisoned.
    pub fn write_count(&self) -> KeyValueResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.writes)
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> KeyValueError {
    KeyValueError::backend(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.entries.insert(key.to_owned(), value.to_owned());
        state.writes += 1;
        Ok(())
    }

    async fn remove(&self, key: &str) -> KeyValueResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.entries.remove(key);
        state.writes += 1;
        Ok(())
    }
}
