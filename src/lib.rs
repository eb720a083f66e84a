//! Jotter: task capture and persistence core for a personal task tracker.
//!
//! This crate turns dictated transcripts into task titles and keeps the
//! authoritative task collection synchronized with a key-value store across
//! restarts.
//!
//! # Architecture
//!
//! Jotter follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`capture`]: Transcript segmentation and voice capture
//! - [`task`]: Task collection, mutations, and snapshot persistence

pub mod capture;
pub mod task;
