//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://data/urls.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base for short URLs (default: derived from the `Host` header)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_LENGTH` - Length of generated codes (default: 6, range: 1-20)
//! - `MAX_ATTEMPTS` - Random codes tried after a collision (default: 5, range: 1-100)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::Result;
use std::env;
use std::time::Duration;

use crate::application::services::{AllocationPolicy, DEFAULT_MAX_ATTEMPTS};
use crate::infrastructure::db::DbSettings;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/urls.db";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Public base URL used to build `short_url` in responses.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    /// Length of generated short codes (`CODE_LENGTH`).
    pub code_length: usize,
    /// Random codes tried once the deterministic code is taken (`MAX_ATTEMPTS`).
    pub max_attempts: usize,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url = env::var("BASE_URL").ok().filter(|v| !v.trim().is_empty());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_LENGTH);

        let max_attempts = env::var("MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            log_level,
            log_format,
            code_length,
            max_attempts,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a `sqlite:` URL
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is set but not `http://` or `https://`
    /// - `log_format` is not `text` or `json`
    /// - `code_length` or `max_attempts` is out of range
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "CODE_LENGTH must be between 1 and {}, got {}",
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.max_attempts == 0 || self.max_attempts > 100 {
            anyhow::bail!(
                "MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.max_attempts
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    pub fn allocation_policy(&self) -> AllocationPolicy {
        AllocationPolicy {
            code_length: self.code_length,
            max_attempts: self.max_attempts,
        }
    }

    pub fn db_settings(&self) -> DbSettings {
        DbSettings {
            url: self.database_url.clone(),
            max_connections: self.db_max_connections,
            connect_timeout: Duration::from_secs(self.db_connect_timeout),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: from Host header"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Code length: {}, max attempts: {}",
            self.code_length,
            self.max_attempts
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
