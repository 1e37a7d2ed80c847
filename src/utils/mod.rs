//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`db_error`] - Classification of driver errors
//! - [`request_base`] - Public base URL derivation from HTTP headers
//! - [`url_validator`] - Checks on URLs submitted for shortening

pub mod code_generator;
pub mod db_error;
pub mod request_base;
pub mod url_validator;
