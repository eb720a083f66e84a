//! Error types for snapshot encoding and persistence.

use crate::task::ports::KeyValueError;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while encoding or decoding the snapshot blob.
#[derive(Debug, Clone, Error)]
pub enum CodecError {
    /// The blob is not valid snapshot JSON.
    #[error("malformed task snapshot: {0}")]
    Json(Arc<serde_json::Error>),

    /// A timestamp field is not a valid RFC 3339 value.
    #[error("invalid {field} timestamp '{value}'")]
    InvalidTimestamp {
        /// Name of the offending field.
        field: &'static str,
        /// Raw field value.
        value: String,
    },

    /// Two records in the blob share an id.
    #[error("duplicate task id '{id}' in snapshot")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(Arc::new(err))
    }
}

/// Reasons a stored snapshot could not be loaded.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The key-value store could not be read.
    #[error("failed to read task snapshot: {0}")]
    Read(#[source] KeyValueError),

    /// The stored blob could not be decoded.
    #[error("failed to decode task snapshot: {0}")]
    Decode(#[source] CodecError),
}

/// Errors returned by snapshot writes.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The collection could not be encoded.
    #[error("failed to encode task snapshot: {0}")]
    Encode(#[source] CodecError),

    /// The key-value store rejected the write.
    #[error("failed to save task snapshot: {0}")]
    Write(#[source] KeyValueError),

    /// The key-value store rejected the removal.
    #[error("failed to clear task snapshot: {0}")]
    Clear(#[source] KeyValueError),
}
