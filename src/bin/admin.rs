//! CLI administration tool for shortkey.
//!
//! Talks to the database directly, so it works while the HTTP server is
//! stopped.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Busiest domains and total mappings
//! cargo run --bin admin -- stats --limit 10
//!
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com/page
//!
//! # Look up the URL behind a key
//! cargo run --bin admin -- resolve 6f1c...
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//! - `PUBLIC_BASE_URL` (optional): base used when printing short URLs

use shortkey::application::services::DEFAULT_TOP_DOMAINS;
use shortkey::config::Config;
use shortkey::server::build_state;
use shortkey::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;

/// CLI tool for managing shortkey.
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
    /// Show the busiest domains and the number of stored mappings
    Stats {
        /// Number of domains to list
        #[arg(short, long, default_value_t = DEFAULT_TOP_DOMAINS)]
        limit: i64,
    },

    /// Shorten a URL without going through the HTTP API
    Shorten {
        /// Absolute URL to shorten
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the URL stored under a reference key
    Resolve {
        /// Reference key
        key: String,
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

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let public_base_url = std::env::var("PUBLIC_BASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty());

    match cli.command {
        Commands::Stats { limit } => {
            handle_stats(&build_state(pool, public_base_url), limit).await?
        }
        Commands::Shorten { url, yes } => {
            handle_shorten(&build_state(pool, public_base_url), url, yes).await?
        }
        Commands::Resolve { key } => {
            handle_resolve(&build_state(pool, public_base_url), &key).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints the domain leaderboard and the mapping count.
async fn handle_stats(state: &AppState, limit: i64) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let total = state.mapping_service.count().await?;
    let top = state.domain_counter.top_domains(limit).await?;

    println!("  Mappings: {}", total.to_string().bright_green().bold());
    println!();

    if top.is_empty() {
        println!("{}", "  No domains counted yet".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<4} {:<50} {}",
        "#".bright_white().bold(),
        "Domain".bright_white().bold(),
        "Count".bright_white().bold()
    );
    println!("  {}", "─".repeat(64).bright_black());

    for (rank, entry) in top.iter().enumerate() {
        println!(
            "  {:<4} {:<50} {}",
            (rank + 1).to_string().bright_black(),
            entry.domain_name.cyan(),
            entry.count.to_string().bright_yellow()
        );
    }
    println!();

    Ok(())
}

/// Shortens a URL, prompting for it when not given on the command line.
async fn handle_shorten(state: &AppState, url: Option<String>, yes: bool) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL")
            .interact_text()
            .context("Failed to read URL")?,
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Shorten {}?", url))
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let outcome = state.mapping_service.shorten(&url).await?;
    let key = outcome.reference_key();

    println!();
    if outcome.is_new {
        println!("{}", "✅ Short link created".green().bold());
    } else {
        println!("{}", "ℹ️  URL was already shortened".yellow());
    }
    println!("  URL: {}", outcome.mapping.actual_url.cyan());
    println!("  Key: {}", key.bright_yellow().bold());

    if let Some(base) = state.public_base_url.as_deref() {
        println!(
            "  Short URL: {}",
            state.mapping_service.short_url(base, key).bright_white()
        );
    }
    println!();

    Ok(())
}

/// Prints the URL stored under `key`.
async fn handle_resolve(state: &AppState, key: &str) -> Result<()> {
    let url = state.mapping_service.resolve(key).await?;

    println!("  Key: {}", key.bright_black());
    println!("  URL: {}", url.cyan());

    Ok(())
}

/// Executes database maintenance commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            print!("Checking database connection... ");
            sqlx::query("SELECT 1").execute(pool).await?;
            println!("{}", "✅ OK".green());
        }
        DbAction::Info => {
            let version: (String,) = sqlx::query_as("SELECT version()").fetch_one(pool).await?;

            println!("{}", "🗄️  Database Info".bright_blue().bold());
            println!();
            println!("  Version: {}", version.0.bright_white());
            println!();
        }
        DbAction::Migrate => {
            print!("Applying migrations... ");
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;
            println!("{}", "✅ Done".green());
        }
    }

    Ok(())
}
