//! Unit tests for the task collection, its codec, and its store.
