//! SQLite connection pool setup and schema migration.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Pool settings derived from [`crate::config::Config`].
#[derive(Debug, Clone)]
pub struct DbSettings {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

/// Opens the database at `settings.url`, creating the file and its parent
/// directory if needed, and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the directory cannot be
/// created, the database cannot be opened, or a migration fails.
pub async fn connect(settings: &DbSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);

    if let Some(parent) = options
        .get_filename()
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.connect_timeout)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

/// Opens a private in-memory database with the schema applied.
///
/// The pool holds exactly one connection that is never recycled, since the
/// database lives only as long as that connection.
///
/// # Errors
///
/// Returns an error if SQLite cannot be opened or a migration fails.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("Database schema is up to date");
    Ok(())
}
