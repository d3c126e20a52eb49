//! HTTP server initialization and runtime setup.
//!
//! Opens the database file, applies migrations, wires repositories into
//! services, and runs the Axum server.

use crate::application::services::{AuthService, EmployeeService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    SqliteAccountRepository, SqliteEmployeeRepository, SqliteSessionRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (the database file is created on first startup)
/// - Migrations
/// - Repository-backed services and shared state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened or migrated
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await
        .context("Failed to open database")?;
    tracing::info!(path = %config.database_path, "Database ready");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    if config.uses_default_secret() {
        tracing::warn!("SESSION_SECRET is not set; using the built-in development secret");
    }

    let pool = Arc::new(pool);
    let account_repository = Arc::new(SqliteAccountRepository::new(pool.clone()));
    let session_repository = Arc::new(SqliteSessionRepository::new(pool.clone()));
    let employee_repository = Arc::new(SqliteEmployeeRepository::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        account_repository,
        session_repository,
        config.session_secret.clone(),
        config.session_ttl_hours,
    ));
    let employee_service = Arc::new(EmployeeService::new(employee_repository));

    let state = AppState::new(auth_service, employee_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
