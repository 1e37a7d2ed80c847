//! Core domain entities.
//!
//! - [`Link`] - A persisted short link
//! - [`NewLink`] - Insert payload; the store assigns `id` and `created_at`

pub mod link;

pub use link::{Link, NewLink};
