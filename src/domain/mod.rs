//! Domain layer containing business entities, errors and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`errors`] - Store and allocation error taxonomy
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod errors;
pub mod repositories;
