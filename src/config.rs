//! Application configuration.
//!
//! Every setting has a fixed built-in default, so the binary runs with no
//! environment at all: the SQLite file `employees.db` is created next to
//! the process on first startup and the server listens on
//! `127.0.0.1:3000`. Environment variables override the defaults:
//!
//! - `DATABASE_PATH` - SQLite database file location
//! - `LISTEN` - Bind address
//! - `SESSION_SECRET` - HMAC key for session token hashing; the built-in
//!   development secret is used (with a startup warning) when unset
//! - `SESSION_TTL_HOURS` - Login lifetime
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)
//!
//! A `.env` file is honored when present (loaded in `main.rs` and the
//! admin binary via `dotenvy::dotenv()`).

use anyhow::Result;
use std::env;

pub const DEFAULT_DATABASE_PATH: &str = "employees.db";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
/// Development-only fallback; `server::run` warns when it is in use.
pub const DEFAULT_SESSION_SECRET: &str = "insecure-dev-session-secret";
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 168;

/// Service configuration with fixed-constant defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub listen_addr: String,
    /// HMAC signing secret used to hash session tokens before storage.
    pub session_secret: String,
    /// How long a login stays valid, in hours.
    pub session_ttl_hours: i64,
    pub log_level: String,
    pub log_format: String,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables, falling back to the
    /// built-in defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let session_secret =
            env::var("SESSION_SECRET").unwrap_or_else(|_| DEFAULT_SESSION_SECRET.to_string());

        let session_ttl_hours = env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SESSION_TTL_HOURS);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_path,
            listen_addr,
            session_secret,
            session_ttl_hours,
            log_level,
            log_format,
            db_max_connections,
        })
    }

    /// True when the built-in development secret is still in place.
    pub fn uses_default_secret(&self) -> bool {
        self.session_secret == DEFAULT_SESSION_SECRET
    }
}
