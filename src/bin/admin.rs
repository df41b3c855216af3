//! CLI administration tool for linkhandler.
//!
//! Provides commands for generating API tokens, checking the tab
//! configuration and probing the CMS database without requiring HTTP API
//! access.
//!
//! # Usage
//!
//! ```bash
//! # Generate a new API token and its configuration hash
//! cargo run --bin admin -- token generate
//!
//! # Validate the tab configuration document
//! cargo run --bin admin -- config check --path config/tabs.json
//!
//! # Check the CMS database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for `db check`): PostgreSQL connection string

use linkhandler::application::services::AuthService;
use linkhandler::domain::tabs::TabRegistry;

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use rand::RngCore;
use sqlx::PgPool;

/// CLI tool for managing linkhandler.
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
    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Tab configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Generate a new API token and print its configuration hash
    Generate {
        /// Skip confirmation prompt before printing the plaintext token
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Tab configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Parse and summarize a tab configuration document
    Check {
        /// Path to the JSON document
        #[arg(short, long, default_value = "config/tabs.json")]
        path: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check the CMS database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token { action } => match action {
            TokenAction::Generate { yes } => generate_token(yes),
        },
        Commands::Config { action } => match action {
            ConfigAction::Check { path } => check_config(&path),
        },
        Commands::Db { action } => match action {
            DbAction::Check => check_database().await,
        },
    }
}

/// Generates a random token and prints it with its SHA-256 hash.
///
/// The hash goes into `API_TOKEN_HASH`; the plaintext token goes to the
/// editor integration and is never stored by the service.
fn generate_token(yes: bool) -> Result<()> {
    if !yes {
        let proceed = Confirm::new()
            .with_prompt("The plaintext token will be printed to this terminal. Continue?")
            .default(true)
            .interact()?;

        if !proceed {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    let token = URL_SAFE_NO_PAD.encode(bytes);
    let hash = AuthService::hash_token(&token);

    println!("{}", "API token generated".green().bold());
    println!("  Token (give to the editor integration): {}", token.cyan());
    println!("  API_TOKEN_HASH (service configuration):");
    println!("{hash}");

    Ok(())
}

/// Parses the tab configuration and prints a summary.
fn check_config(path: &str) -> Result<()> {
    let document = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tab configuration from {path}"))?;

    let registry = TabRegistry::from_json(&document)?;

    println!("{}", format!("{path} is valid").green().bold());
    println!("  Tabs ({}):", registry.tabs().len());
    for tab in registry.tabs() {
        let tables = if tab.allowed_tables.is_empty() {
            "all tables".to_string()
        } else {
            tab.allowed_tables.join(", ")
        };
        println!("    {} - {} ({})", tab.anchor_type.cyan(), tab.label, tables);
    }

    let tables: Vec<&str> = registry.table_names().collect();
    println!("  Record tables with metadata: {}", tables.join(", "));

    if registry.is_empty() {
        println!("{}", "Warning: no tabs configured".yellow());
    }

    Ok(())
}

/// Probes the CMS database connection.
async fn check_database() -> Result<()> {
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set for db check")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to the CMS database")?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    println!("{}", "Database connection OK".green().bold());

    Ok(())
}
