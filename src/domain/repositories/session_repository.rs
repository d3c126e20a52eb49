//! Repository trait for login session data access.

use crate::domain::entities::{NewSession, Session};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for login sessions.
///
/// Sessions are stored by token hash only; the opaque cookie token is
/// hashed by [`crate::application::services::AuthService`] before it
/// reaches this layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteSessionRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Creates a new session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_session: NewSession) -> Result<Session, AppError>;

    /// Finds a session by its token hash.
    ///
    /// Expiry is not checked here; callers decide what to do with a stale
    /// session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, AppError>;

    /// Deletes a session by its token hash.
    ///
    /// Returns `Ok(true)` if a session was deleted, `Ok(false)` if none
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Deletes every session that expired before `now`.
    ///
    /// Returns the number of rows removed. Used by the admin CLI; the
    /// request path never purges.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError>;
}
