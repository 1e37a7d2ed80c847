//! # URL Shortener
//!
//! A URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Link entity, error taxonomy and repository traits
//! - **Application Layer** ([`application`]) - Short code allocation service
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool and repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Short Codes
//!
//! A generated code is first derived from the SHA-256 digest of the URL, so
//! shortening a URL for the first time is reproducible. When that code is
//! taken, random codes are tried up to a configured budget. Callers may
//! instead reserve a custom code. The unique index on `urls.short_code` is
//! the final arbiter between concurrent writers.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/urls.db"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
