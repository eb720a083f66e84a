//! Temporary directory fixtures for filesystem-backed tests.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{Result, WrapErr, eyre};
use jotter::task::{
    adapters::filesystem::DirectoryKeyValueStore,
    persistence::TaskArchive,
    services::TaskStore,
};
use mockable::DefaultClock;
use tempfile::TempDir;

/// Store type used by filesystem tests.
pub type DiskStore = TaskStore<DirectoryKeyValueStore, DefaultClock>;

/// A temporary directory that is removed when dropped.
pub struct Workspace {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl Workspace {
    /// Creates an empty temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is
    /// not valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().wrap_err("create temporary directory")?;
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| eyre!("temporary path is not UTF-8: {}", path.display()))?;
        Ok(Self { _dir: dir, path })
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Opens a key-value store over the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn open_store(&self) -> Result<DirectoryKeyValueStore> {
        DirectoryKeyValueStore::open(&self.path).wrap_err("open directory store")
    }

    /// Starts a task store over the directory and spawns its worker.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn start_task_store(&self) -> Result<DiskStore> {
        let archive = TaskArchive::with_default_key(Arc::new(self.open_store()?));
        let (store, worker) = TaskStore::new(archive, Arc::new(DefaultClock));
        tokio::spawn(worker.run());
        Ok(store)
    }
}
