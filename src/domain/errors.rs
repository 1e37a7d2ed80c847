//! Error types shared by the persistence gateway and the link service.

use thiserror::Error;

/// Failure reported by a [`crate::domain::repositories::LinkRepository`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store's unique index rejected the short code.
    #[error("short code '{code}' already exists")]
    DuplicateCode { code: String },

    /// Connectivity or I/O failure in the underlying store.
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Failure reported by [`crate::application::services::LinkService`].
///
/// `InvalidUrl`, `InvalidCode` and `CodeTaken` are caller faults;
/// `AllocationExhausted` and `StoreUnavailable` are server faults.
#[derive(Debug, Error)]
pub enum ShortenError {
    #[error("invalid URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid custom code '{code}': {reason}")]
    InvalidCode { code: String, reason: String },

    #[error("short code '{code}' is already taken")]
    CodeTaken { code: String },

    #[error("failed to allocate a unique short code after {attempts} attempts")]
    AllocationExhausted { attempts: usize },

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),
}

impl ShortenError {
    /// Returns true for errors caused by the request rather than the service.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. } | Self::InvalidCode { .. } | Self::CodeTaken { .. }
        )
    }
}

/// A duplicate surfacing outside the generated-code retry loop means a
/// caller-chosen code lost a race, which is reported as `CodeTaken`.
impl From<StoreError> for ShortenError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateCode { code } => Self::CodeTaken { code },
            StoreError::Unavailable(source) => Self::StoreUnavailable(source),
        }
    }
}
