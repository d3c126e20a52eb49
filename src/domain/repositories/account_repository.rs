//! Repository trait for login account data access.

use crate::domain::entities::{Account, NewAccount};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for login accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteAccountRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username already exists
    /// (column constraint; callers check first for the warning path).
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError>;

    /// Finds an account by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AppError>;

    /// Finds an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, AppError>;

    /// Lists all accounts ordered by creation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Account>, AppError>;
}
