//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the task store.

pub mod key_value;

pub use key_value::{KeyValueError, KeyValueResult, KeyValueStore};
