//! Application services owning the task collection.

mod config;
mod store;
mod worker;

pub use config::TaskStoreConfig;
pub use store::{TaskSnapshot, TaskStore, TaskStoreError};
pub use worker::PersistenceWorker;
