//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`db`] - Connection pool setup and migrations
//! - [`persistence`] - SQLite repository implementations

pub mod db;
pub mod persistence;
