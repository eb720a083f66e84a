//! Filesystem adapter implementations.

mod key_value;

pub use key_value::DirectoryKeyValueStore;
