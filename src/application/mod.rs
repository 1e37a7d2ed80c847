//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for the HTTP
//! handlers and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Short code allocation, lookup and deletion

pub mod services;
