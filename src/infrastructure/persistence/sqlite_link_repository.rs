//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::StoreError;
use crate::domain::repositories::LinkRepository;
use crate::utils::db_error::is_unique_violation_on_code;

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.original_url, row.short_code, row.created_at)
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Each call checks a connection out of the pool for its own duration.
/// Writes run inside a transaction that is committed on success; any early
/// return drops the transaction, which rolls it back.
#[derive(Clone)]
pub struct SqliteLinkRepository {
    pool: SqlitePool,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let found: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM urls WHERE short_code = ? LIMIT 1")
                .bind(code)
                .fetch_optional(&mut *conn)
                .await?;

        Ok(found.is_some())
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO urls (original_url, short_code)
            VALUES (?, ?)
            RETURNING id, original_url, short_code, created_at
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                StoreError::DuplicateCode {
                    code: new_link.short_code.clone(),
                }
            } else {
                StoreError::Unavailable(e)
            }
        })?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn find(&self, code: &str) -> Result<Option<Link>, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM urls
            WHERE short_code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(Link::from))
    }

    async fn delete(&self, code: &str) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM urls WHERE short_code = ?")
            .bind(code)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}
