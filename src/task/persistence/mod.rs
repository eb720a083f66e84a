//! Serialization contract between the task collection and persistence.
//!
//! The whole collection is written as one blob under one key. A missing or
//! malformed blob loads as an empty collection; write failures are reported
//! to the caller as [`PersistenceError`].

mod archive;
mod codec;
mod error;

pub use archive::{DEFAULT_STORAGE_KEY, TaskArchive};
pub use codec::{decode_tasks, encode_tasks};
pub use error::{CodecError, LoadError, PersistenceError};
