//! Task collection and its persistence.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The snapshot serialization contract in [`persistence`]
//! - The owning store in [`services`]

pub mod adapters;
pub mod domain;
pub mod persistence;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
