//! Short code allocation and link lookup service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::{ShortenError, StoreError};
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, deterministic_code, random_code, validate_custom_code,
};
use crate::utils::url_validator::validate_original_url;

/// Default number of random codes tried once the deterministic code is taken.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Tunables for generated-code allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationPolicy {
    /// Length of generated codes.
    pub code_length: usize,
    /// Random codes tried after the deterministic code is taken.
    pub max_attempts: usize,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Service for allocating, resolving and deleting short links.
///
/// The `exists` probe before each insert only avoids pointless writes. The
/// store's unique index decides; an insert that loses a race against a
/// concurrent writer is treated like a taken code.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    policy: AllocationPolicy,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, policy: AllocationPolicy) -> Self {
        Self {
            link_repository,
            policy,
        }
    }

    /// Allocates a unique short code for `original_url` and persists it.
    ///
    /// # Code Selection
    ///
    /// - If `custom_code` is provided, validates and reserves it; a taken
    ///   code fails the request without retry
    /// - Otherwise tries the URL's deterministic code first, then up to
    ///   `max_attempts` random codes
    ///
    /// The URL is stored verbatim, so it is validated before anything else.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidUrl`] if the URL is empty, not http(s), or
    ///   contains whitespace or control characters
    /// - [`ShortenError::InvalidCode`] if the custom code breaks the format rules
    /// - [`ShortenError::CodeTaken`] if the custom code already exists
    /// - [`ShortenError::AllocationExhausted`] if every generated code was taken
    /// - [`ShortenError::StoreUnavailable`] on database errors
    pub async fn create(
        &self,
        original_url: &str,
        custom_code: Option<&str>,
    ) -> Result<Link, ShortenError> {
        validate_original_url(original_url)?;

        match custom_code {
            Some(code) => self.reserve_custom_code(original_url, code).await,
            None => self.allocate_generated_code(original_url).await,
        }
    }

    /// Returns the original URL for `code`, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::StoreUnavailable`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, ShortenError> {
        let link = self.link_repository.find(code).await?;
        Ok(link.map(|l| l.original_url))
    }

    /// Returns the full stored record for `code`, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::StoreUnavailable`] on database errors.
    pub async fn stats(&self, code: &str) -> Result<Option<Link>, ShortenError> {
        Ok(self.link_repository.find(code).await?)
    }

    /// Hard-deletes `code`. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::StoreUnavailable`] on database errors.
    pub async fn remove(&self, code: &str) -> Result<bool, ShortenError> {
        let deleted = self.link_repository.delete(code).await?;
        if deleted {
            info!(code, "short link deleted");
        }
        Ok(deleted)
    }

    /// Counts stored links; doubles as a store connectivity check.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::StoreUnavailable`] on database errors.
    pub async fn total_links(&self) -> Result<i64, ShortenError> {
        Ok(self.link_repository.count().await?)
    }

    async fn reserve_custom_code(
        &self,
        original_url: &str,
        code: &str,
    ) -> Result<Link, ShortenError> {
        validate_custom_code(code)?;

        if self.link_repository.exists(code).await? {
            return Err(ShortenError::CodeTaken {
                code: code.to_string(),
            });
        }

        // A racing insert surfaces as DuplicateCode, which converts to CodeTaken.
        let link = self
            .link_repository
            .insert(NewLink::new(original_url, code))
            .await?;

        info!(code = %link.short_code, id = link.id, "custom short link created");
        Ok(link)
    }

    async fn allocate_generated_code(&self, original_url: &str) -> Result<Link, ShortenError> {
        let code = deterministic_code(original_url, self.policy.code_length);
        if let Some(link) = self.try_insert(original_url, code).await? {
            info!(code = %link.short_code, id = link.id, "short link created");
            return Ok(link);
        }

        for attempt in 1..=self.policy.max_attempts {
            let code = random_code(self.policy.code_length);
            if let Some(link) = self.try_insert(original_url, code).await? {
                info!(
                    code = %link.short_code,
                    id = link.id,
                    attempt,
                    "short link created with random code"
                );
                return Ok(link);
            }
            debug!(attempt, "random code collision, retrying");
        }

        warn!(
            attempts = self.policy.max_attempts,
            "failed to allocate a unique short code"
        );
        Err(ShortenError::AllocationExhausted {
            attempts: self.policy.max_attempts,
        })
    }

    /// Probes and inserts a generated code.
    ///
    /// Returns `Ok(None)` when the code is taken, whether the probe saw it or
    /// the insert lost a race for it.
    async fn try_insert(
        &self,
        original_url: &str,
        code: String,
    ) -> Result<Option<Link>, ShortenError> {
        if self.link_repository.exists(&code).await? {
            debug!(code = %code, "short code taken");
            return Ok(None);
        }

        match self
            .link_repository
            .insert(NewLink::new(original_url, code))
            .await
        {
            Ok(link) => Ok(Some(link)),
            Err(StoreError::DuplicateCode { code }) => {
                warn!(code = %code, "insert lost a race for short code");
                Ok(None)
            }
            Err(StoreError::Unavailable(e)) => Err(ShortenError::StoreUnavailable(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::utils::code_generator::is_base62;
    use chrono::Utc;

    const URL: &str = "https://example.com";
    // deterministic_code("https://example.com", 6)
    const URL_CODE: &str = "ic7bD0";

    fn stored(new_link: NewLink, id: i64) -> Link {
        Link::new(id, new_link.original_url, new_link.short_code, Utc::now())
    }

    fn service(mock: MockLinkRepository) -> LinkService<MockLinkRepository> {
        LinkService::new(Arc::new(mock), AllocationPolicy::default())
    }

    #[tokio::test]
    async fn test_create_uses_deterministic_code_first() {
        let mut mock = MockLinkRepository::new();

        mock.expect_exists()
            .withf(|code| code == URL_CODE)
            .times(1)
            .returning(|_| Ok(false));
        mock.expect_insert()
            .withf(|new_link| new_link.short_code == URL_CODE && new_link.original_url == URL)
            .times(1)
            .returning(|new_link| Ok(stored(new_link, 1)));

        let link = service(mock).create(URL, None).await.unwrap();

        assert_eq!(link.short_code, URL_CODE);
        assert_eq!(link.original_url, URL);
    }

    #[tokio::test]
    async fn test_create_falls_back_to_random_code_when_taken() {
        let mut mock = MockLinkRepository::new();

        mock.expect_exists()
            .withf(|code| code == URL_CODE)
            .times(1)
            .returning(|_| Ok(true));
        mock.expect_exists()
            .withf(|code| code != URL_CODE)
            .times(1)
            .returning(|_| Ok(false));
        mock.expect_insert()
            .withf(|new_link| new_link.short_code != URL_CODE)
            .times(1)
            .returning(|new_link| Ok(stored(new_link, 2)));

        let link = service(mock).create(URL, None).await.unwrap();

        assert_ne!(link.short_code, URL_CODE);
        assert_eq!(link.short_code.len(), 6);
        assert!(is_base62(&link.short_code));
    }

    #[tokio::test]
    async fn test_create_retries_after_insert_race() {
        let mut mock = MockLinkRepository::new();

        mock.expect_exists().times(2).returning(|_| Ok(false));

        let mut calls = 0;
        mock.expect_insert().times(2).returning(move |new_link| {
            calls += 1;
            if calls == 1 {
                Err(StoreError::DuplicateCode {
                    code: new_link.short_code,
                })
            } else {
                Ok(stored(new_link, 3))
            }
        });

        let link = service(mock).create(URL, None).await.unwrap();

        assert_ne!(link.short_code, URL_CODE);
    }

    #[tokio::test]
    async fn test_create_exhausts_attempt_budget() {
        let mut mock = MockLinkRepository::new();

        // Deterministic probe + one probe per random attempt.
        mock.expect_exists()
            .times(1 + DEFAULT_MAX_ATTEMPTS)
            .returning(|_| Ok(true));
        mock.expect_insert().times(0);

        let err = service(mock).create(URL, None).await.unwrap_err();

        assert!(matches!(
            err,
            ShortenError::AllocationExhausted { attempts } if attempts == DEFAULT_MAX_ATTEMPTS
        ));
    }

    #[tokio::test]
    async fn test_create_respects_custom_policy() {
        let mut mock = MockLinkRepository::new();

        mock.expect_exists().times(3).returning(|_| Ok(true));

        let policy = AllocationPolicy {
            code_length: 8,
            max_attempts: 2,
        };
        let err = LinkService::new(Arc::new(mock), policy)
            .create(URL, None)
            .await
            .unwrap_err();

        assert!(matches!(err, ShortenError::AllocationExhausted { attempts: 2 }));
    }

    #[tokio::test]
    async fn test_create_with_custom_code() {
        let mut mock = MockLinkRepository::new();

        mock.expect_exists()
            .withf(|code| code == "mycode")
            .times(1)
            .returning(|_| Ok(false));
        mock.expect_insert()
            .withf(|new_link| new_link.short_code == "mycode")
            .times(1)
            .returning(|new_link| Ok(stored(new_link, 4)));

        let link = service(mock).create(URL, Some("mycode")).await.unwrap();

        assert_eq!(link.short_code, "mycode");
    }

    #[tokio::test]
    async fn test_create_custom_code_taken_does_not_retry() {
        let mut mock = MockLinkRepository::new();

        mock.expect_exists().times(1).returning(|_| Ok(true));
        mock.expect_insert().times(0);

        let err = service(mock).create(URL, Some("mycode")).await.unwrap_err();

        assert!(matches!(err, ShortenError::CodeTaken { ref code } if code == "mycode"));
    }

    #[tokio::test]
    async fn test_create_custom_code_race_is_code_taken() {
        let mut mock = MockLinkRepository::new();

        mock.expect_exists().times(1).returning(|_| Ok(false));
        mock.expect_insert().times(1).returning(|new_link| {
            Err(StoreError::DuplicateCode {
                code: new_link.short_code,
            })
        });

        let err = service(mock).create(URL, Some("mycode")).await.unwrap_err();

        assert!(matches!(err, ShortenError::CodeTaken { .. }));
    }

    #[tokio::test]
    async fn test_create_invalid_custom_code_skips_store() {
        let mut mock = MockLinkRepository::new();

        mock.expect_exists().times(0);
        mock.expect_insert().times(0);

        let err = service(mock).create(URL, Some("no")).await.unwrap_err();

        assert!(matches!(err, ShortenError::InvalidCode { .. }));
    }

    #[tokio::test]
    async fn test_create_invalid_url_skips_store() {
        for (url, custom_code) in [
            ("", None),
            ("", Some("mycode")),
            ("ftp://example.com", None),
            ("https://example.com/a\nb", None),
        ] {
            let mut mock = MockLinkRepository::new();

            mock.expect_exists().times(0);
            mock.expect_insert().times(0);

            let err = service(mock).create(url, custom_code).await.unwrap_err();

            assert!(
                matches!(err, ShortenError::InvalidUrl { .. }),
                "{url:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_create_propagates_store_failure() {
        let mut mock = MockLinkRepository::new();

        mock.expect_exists()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut)));

        let err = service(mock).create(URL, None).await.unwrap_err();

        assert!(matches!(err, ShortenError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_create_insert_failure_is_not_retried() {
        let mut mock = MockLinkRepository::new();

        mock.expect_exists().times(1).returning(|_| Ok(false));
        mock.expect_insert()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable(sqlx::Error::PoolClosed)));

        let err = service(mock).create(URL, None).await.unwrap_err();

        assert!(matches!(err, ShortenError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_resolve_not_found_is_none() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find().times(1).returning(|_| Ok(None));

        let result = service(mock).resolve("doesnotexist").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_remove_passes_through() {
        let mut mock = MockLinkRepository::new();

        mock.expect_delete()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(true));

        assert!(service(mock).remove("abc123").await.unwrap());
    }
}
