//! # lendhub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all LendHub entities, plus in-memory store
//! implementations used by tests and local development.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
