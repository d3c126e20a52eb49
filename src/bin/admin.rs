//! CLI administration tool for the employee directory.
//!
//! Provides commands for managing login accounts, purging stale sessions,
//! and checking the database without going through the web UI.
//!
//! # Usage
//!
//! ```bash
//! # Create a login account interactively
//! cargo run --bin admin -- account create
//!
//! # List all accounts
//! cargo run --bin admin -- account list
//!
//! # Delete expired login sessions
//! cargo run --bin admin -- session purge
//!
//! # View table counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_PATH`, `SESSION_SECRET`, etc., all with
//! built-in defaults (see the `config` module).

use employee_directory::application::services::AuthService;
use employee_directory::config::Config;
use employee_directory::domain::repositories::{AccountRepository, SessionRepository};
use employee_directory::error::AppError;
use employee_directory::infrastructure::persistence::{
    SqliteAccountRepository, SqliteSessionRepository,
};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::sync::Arc;

/// CLI tool for managing the employee directory.
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
    /// Manage login accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Manage login sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show table counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum AccountAction {
    /// Create a new login account
    Create {
        /// Username (prompted interactively if omitted)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// List all accounts
    List,
}

/// Session management subcommands.
#[derive(Subcommand)]
enum SessionAction {
    /// Delete expired sessions
    Purge,
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
    let config = Config::from_env()?;

    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .context("Failed to open database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    match cli.command {
        Commands::Account { action } => handle_account_action(action, &pool, &config).await?,
        Commands::Session { action } => handle_session_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_account_action(
    action: AccountAction,
    pool: &SqlitePool,
    config: &Config,
) -> Result<()> {
    let accounts = Arc::new(SqliteAccountRepository::new(Arc::new(pool.clone())));

    match action {
        AccountAction::Create { username } => {
            let sessions = Arc::new(SqliteSessionRepository::new(Arc::new(pool.clone())));
            let auth_service = AuthService::new(
                accounts,
                sessions,
                config.session_secret.clone(),
                config.session_ttl_hours,
            );
            create_account(&auth_service, username).await?;
        }
        AccountAction::List => {
            list_accounts(accounts).await?;
        }
    }

    Ok(())
}

/// Creates a login account with interactive prompts.
///
/// The password is hashed exactly as the `/register` page hashes it; only
/// the Argon2 PHC string reaches the database.
async fn create_account(
    auth_service: &AuthService<SqliteAccountRepository, SqliteSessionRepository>,
    username: Option<String>,
) -> Result<()> {
    println!("{}", "Create login account".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    match auth_service.register(&username, &password).await {
        Ok(()) => {
            println!();
            println!("{}", "Account created successfully!".green().bold());
            println!(
                "  Log in at {} with username {}",
                "/login".bright_cyan(),
                username.bright_yellow()
            );
        }
        Err(AppError::Conflict { .. }) => {
            println!();
            println!("{}", "An account with that username already exists".red());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to create account: {}", e)),
    }

    Ok(())
}

/// Lists all accounts.
async fn list_accounts(accounts: Arc<SqliteAccountRepository>) -> Result<()> {
    let all = accounts
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if all.is_empty() {
        println!("{}", "No accounts registered".yellow());
        return Ok(());
    }

    println!("{}", "Accounts:".bright_white().bold());
    for account in all {
        println!(
            "  {:>4}  {}  {}",
            account.id.to_string().cyan(),
            account.username.bright_white(),
            account
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .dimmed()
        );
    }

    Ok(())
}

/// Dispatches session management commands.
async fn handle_session_action(action: SessionAction, pool: &SqlitePool) -> Result<()> {
    let sessions = SqliteSessionRepository::new(Arc::new(pool.clone()));

    match action {
        SessionAction::Purge => {
            let removed = sessions
                .delete_expired(Utc::now())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to purge sessions: {}", e))?;

            println!(
                "{} {}",
                "Expired sessions removed:".bright_white(),
                removed.to_string().green().bold()
            );
        }
    }

    Ok(())
}

/// Shows row counts for all tables.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    let accounts = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts")
        .fetch_one(pool)
        .await?;
    let employees = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;
    let sessions = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sessions")
        .fetch_one(pool)
        .await?;

    println!("{}", "Directory statistics".bright_blue().bold());
    println!("  Accounts:  {}", accounts.to_string().cyan());
    println!("  Employees: {}", employees.to_string().cyan());
    println!("  Sessions:  {}", sessions.to_string().cyan());

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            let version = sqlx::query_scalar::<_, String>("SELECT sqlite_version()")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;

            println!(
                "{} SQLite {}",
                "Database connection OK".green().bold(),
                version.bright_white()
            );
        }
    }

    Ok(())
}
