//! Adapter implementations of the task persistence ports.
//!
//! - [`memory`]: process-local store for tests and ephemeral sessions
//! - [`filesystem`]: one file per key under a capability-scoped directory

pub mod filesystem;
pub mod memory;
