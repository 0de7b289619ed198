//! CLI administration tool for tinylink.
//!
//! Read-only inspection of the link store without going through HTTP.
//! The database must already exist; the admin tool never creates or migrates it.
//!
//! # Usage
//!
//! ```bash
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Most recent links
//! cargo run --bin admin -- links list --limit 10
//!
//! # One link
//! cargo run --bin admin -- links show 1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (default `sqlite://data.db`): SQLite database

use tinylink::config::Config;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::SqliteLinkRepository;
use tinylink::server::open_existing_database;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for inspecting tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show totals
    Stats,

    /// Inspect links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link inspection subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List the most recently created links
    List {
        /// Maximum number of links to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Show a single link
    Show {
        /// Slug of the link
        slug: String,
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

    let config = Config::from_env();
    let pool = open_existing_database(&config)
        .await
        .with_context(|| format!("Failed to open {}", config.database_url))?;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Stats => handle_stats(&repo).await?,
        Commands::Links { action } => handle_link_action(action, &repo).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Displays link and click totals.
async fn handle_stats(repo: &SqliteLinkRepository) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let links_count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;
    let clicks_count = repo
        .total_clicks()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count clicks: {}", e))?;

    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Dispatches link inspection commands.
async fn handle_link_action(action: LinkAction, repo: &SqliteLinkRepository) -> Result<()> {
    match action {
        LinkAction::List { limit } => list_links(repo, limit).await,
        LinkAction::Show { slug } => show_link(repo, &slug).await,
    }
}

/// Lists recent links.
///
/// # Output Format
///
/// ```text
///   Slug     Clicks   Created            URL
///   ───────────────────────────────────────────────────────────
///   2        0        2024-01-16 14:20   https://rust-lang.org
///   1        3        2024-01-15 10:30   https://example.com
/// ```
async fn list_links(repo: &SqliteLinkRepository, limit: i64) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = repo
        .list_recent(limit.max(1))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<8} {:<18} {}",
        "Slug".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<8} {:<8} {:<18} {}",
            link.slug.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Shown: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Shows all fields of one link.
async fn show_link(repo: &SqliteLinkRepository, slug: &str) -> Result<()> {
    let link = repo
        .find_by_slug(slug)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("Link '{}' not found", slug))?;

    println!("{}", "Link".bright_blue().bold());
    println!();
    println!("  ID:      {}", link.id.to_string().bright_black());
    println!("  Slug:    {}", link.slug.cyan());
    println!("  URL:     {}", link.original_url);
    println!("  Clicks:  {}", link.clicks.to_string().bright_green());
    println!("  Created: {}", link.created_at_iso().bright_black());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
