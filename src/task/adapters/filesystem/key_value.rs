//! Directory-backed key-value store.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::task::ports::{KeyValueError, KeyValueResult, KeyValueStore};

const VALUE_EXTENSION: &str = "json";
const STAGING_EXTENSION: &str = "json.tmp";

/// Key-value store that keeps one UTF-8 file per key inside a directory.
///
/// Writes go to a staging file that is then renamed over the value file, so a
/// reader never observes a half-written value. Access is confined to the
/// opened directory.
#[derive(Debug, Clone)]
pub struct DirectoryKeyValueStore {
    dir: Arc<Dir>,
}

impl DirectoryKeyValueStore {
    /// Opens an existing directory as the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError::Backend`] if the directory cannot be opened.
    pub fn open(path: &Utf8Path) -> KeyValueResult<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(KeyValueError::backend)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened directory handle.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    async fn run_blocking<T, F>(&self, operation: F) -> KeyValueResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Dir) -> KeyValueResult<T> + Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || operation(&dir))
            .await
            .map_err(KeyValueError::backend)?
    }
}

/// Maps a key onto a file name, rejecting anything that could escape the
/// directory or collide with staging files.
fn value_file_name(key: &str) -> KeyValueResult<String> {
    let is_valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'));
    if !is_valid {
        return Err(KeyValueError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{VALUE_EXTENSION}"))
}

fn staging_file_name(key: &str) -> String {
    format!("{key}.{STAGING_EXTENSION}")
}

#[async_trait]
impl KeyValueStore for DirectoryKeyValueStore {
    async fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let file_name = value_file_name(key)?;
        self.run_blocking(move |dir| match dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueError::backend(err)),
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let file_name = value_file_name(key)?;
        let staging_name = staging_file_name(key);
        let contents = value.to_owned();
        self.run_blocking(move |dir| {
            dir.write(&staging_name, contents.as_bytes())
                .map_err(KeyValueError::backend)?;
            dir.rename(&staging_name, dir, &file_name)
                .map_err(KeyValueError::backend)
        })
        .await
    }

    async fn remove(&self, key: &str) -> KeyValueResult<()> {
        let file_name = value_file_name(key)?;
        self.run_blocking(move |dir| match dir.remove_file(&file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KeyValueError::backend(err)),
        })
        .await
    }
}
