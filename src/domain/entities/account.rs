//! Account entity used solely to gate access to the directory.

use chrono::{DateTime, Utc};

/// A registered login account.
///
/// `password_hash` holds an Argon2 PHC string; the plaintext password is
/// never stored. Accounts are created at registration and never mutated.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
}
