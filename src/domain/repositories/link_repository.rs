//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Persistence gateway for short links.
///
/// Implementations must enforce uniqueness of `short_code` in the store
/// itself. A prior [`exists`](LinkRepository::exists) check is only a hint;
/// [`insert`](LinkRepository::insert) is the authority.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns true if a link with exactly this code currently exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn exists(&self, code: &str) -> Result<bool, StoreError>;

    /// Inserts a new link and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the store's unique index
    /// rejects the code, including when a concurrent writer inserted it
    /// after an `exists` check.
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn find(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Hard-deletes a link.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the code did
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, StoreError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn count(&self) -> Result<i64, StoreError>;
}
