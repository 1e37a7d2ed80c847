//! CLI administration tool for url-shortener.
//!
//! Runs the same link operations as the HTTP API directly against the
//! configured database.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (optionally with a custom code)
//! cargo run --bin admin -- create https://example.com
//! cargo run --bin admin -- create https://example.com --code mycode
//!
//! # Show a stored link
//! cargo run --bin admin -- info mycode
//!
//! # Print the original URL only
//! cargo run --bin admin -- resolve mycode
//!
//! # Delete a link
//! cargo run --bin admin -- delete mycode
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (see `url_shortener::config`),
//! notably `DATABASE_URL`, `CODE_LENGTH` and `MAX_ATTEMPTS`.

use url_shortener::application::services::LinkService;
use url_shortener::config;
use url_shortener::domain::errors::ShortenError;
use url_shortener::infrastructure::db;
use url_shortener::infrastructure::persistence::SqliteLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

type Service = LinkService<SqliteLinkRepository>;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Create {
        /// URL to shorten (stored verbatim)
        url: String,

        /// Custom short code (3-20 letters and digits)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show the stored record of a short link
    Info {
        /// Short code
        code: String,
    },

    /// Print the original URL of a short link
    Resolve {
        /// Short code
        code: String,
    },

    /// Delete a short link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    let pool = db::connect(&config.db_settings())
        .await
        .context("Failed to connect to database")?;

    let repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
    let service = LinkService::new(repository, config.allocation_policy());

    let result = match cli.command {
        Commands::Create { url, code } => create_link(&service, &url, code.as_deref()).await,
        Commands::Info { code } => show_info(&service, &code).await,
        Commands::Resolve { code } => resolve_link(&service, &code).await,
        Commands::Delete { code, yes } => delete_link(&service, &code, yes).await,
        Commands::Db { action } => match action {
            DbAction::Check => check_database(&service, &config.database_url).await,
        },
    };

    pool.close().await;
    result
}

/// Creates a short link and prints its code.
async fn create_link(service: &Service, url: &str, code: Option<&str>) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    match service.create(url, code).await {
        Ok(link) => {
            println!("{}", "✅ Short link created".green().bold());
            println!();
            println!("  Code: {}", link.short_code.bright_yellow().bold());
            println!("  URL:  {}", link.original_url.cyan());
            println!("  ID:   {}", link.id.to_string().bright_black());
            println!();
            Ok(())
        }
        Err(e) => {
            if e.is_client_fault() {
                println!("{} {}", "❌".red(), e.to_string().red());
            }
            Err(anyhow::anyhow!("Failed to create link: {}", e))
        }
    }
}

/// Prints the stored record of a short link.
///
/// # Output Format
///
/// ```text
/// 📋 Link mycode
///
///   ID:       1
///   URL:      https://example.com
///   Created:  2024-01-15 10:30:00 UTC
/// ```
async fn show_info(service: &Service, code: &str) -> Result<()> {
    let Some(link) = service
        .stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    else {
        anyhow::bail!("Short link '{}' not found", code);
    };

    println!("{} {}", "📋 Link".bright_blue().bold(), link.short_code.cyan());
    println!();
    println!("  {:<9} {}", "ID:".bright_white(), link.id);
    println!("  {:<9} {}", "URL:".bright_white(), link.original_url);
    println!(
        "  {:<9} {}",
        "Created:".bright_white(),
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Prints the original URL alone, suitable for scripting.
async fn resolve_link(service: &Service, code: &str) -> Result<()> {
    match service
        .resolve(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    {
        Some(url) => {
            println!("{}", url);
            Ok(())
        }
        None => anyhow::bail!("Short link '{}' not found", code),
    }
}

/// Deletes a short link after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
/// - Deletion is permanent
async fn delete_link(service: &Service, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short Link".bright_blue().bold());
    println!();

    let link = service
        .stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let Some(link) = link else {
        anyhow::bail!("Short link '{}' not found", code);
    };

    println!("  Code: {}", link.short_code.cyan());
    println!("  URL:  {}", link.original_url.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link permanently?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = service
        .remove(code)
        .await
        .map_err(|e: ShortenError| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    if !deleted {
        anyhow::bail!("Short link '{}' was deleted concurrently", code);
    }
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Checks database connectivity and reports the number of stored links.
async fn check_database(service: &Service, database_url: &str) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());
    println!();

    match service.total_links().await {
        Ok(count) => {
            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Database: {}", database_url.bright_black());
            println!("  Links:    {}", count.to_string().bright_white().bold());
            println!();
            Ok(())
        }
        Err(e) => {
            println!("{}", "❌ Database connection failed".red().bold());
            Err(anyhow::anyhow!("{}", e))
        }
    }
}
