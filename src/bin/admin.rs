//! CLI administration tool for linkservice.
//!
//! Shortens and resolves links directly against the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- create https://golang.org/
//!
//! # Resolve a short code
//! cargo run --bin admin -- resolve 123_abcABC
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show database info
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (see `linkservice::config`).

use linkservice::config::Config;
use linkservice::domain::repositories::MappingRepository;
use linkservice::infrastructure::persistence::PgMappingRepository;
use linkservice::server::{build_link_service, connect_with_retry};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing linkservice.
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
    /// Shorten a URL (returns the existing code if already shortened)
    Create {
        /// URL to shorten
        url: String,
    },

    /// Resolve a short code to its URL
    Resolve {
        /// Ten-character short code
        code: String,
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

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    config.validate()?;
    // Interactive use: fail fast instead of waiting for the database.
    config.db_connect_attempts = 1;

    let pool = connect_with_retry(&config).await?;

    match cli.command {
        Commands::Create { url } => handle_create(&pool, &url).await?,
        Commands::Resolve { code } => handle_resolve(&pool, &code).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn repository(pool: &PgPool) -> Arc<dyn MappingRepository> {
    Arc::new(PgMappingRepository::new(Arc::new(pool.clone())))
}

async fn handle_create(pool: &PgPool, url: &str) -> Result<()> {
    let service = build_link_service(repository(pool))?;
    let mapping = service.create(url).await?;

    println!("  URL:  {}", mapping.url.bright_white());
    println!("  Code: {}", mapping.code.bright_green().bold());

    Ok(())
}

async fn handle_resolve(pool: &PgPool, code: &str) -> Result<()> {
    let service = build_link_service(repository(pool))?;
    let mapping = service.resolve(code).await?;

    println!("  Code:    {}", mapping.code.bright_white());
    println!("  URL:     {}", mapping.url.bright_green().bold());
    println!("  Created: {}", mapping.created_at.to_rfc3339());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            repository(pool).ping().await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Links:      {}",
                links_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
