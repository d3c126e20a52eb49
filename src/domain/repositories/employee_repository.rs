//! Repository trait for employee record data access.

use crate::domain::entities::{Employee, EmployeeUpdate, NewEmployee};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for employee directory records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteEmployeeRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Creates a new employee record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError>;

    /// Finds a record by identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Employee))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;

    /// Finds a record by email address.
    ///
    /// Used by the add path to check for duplicates before insert. Updates
    /// do not perform this check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError>;

    /// Lists all records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Employee>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Overwrites all mutable fields of a record.
    ///
    /// Returns `Ok(None)` if no record matches `id`; no partial mutation
    /// happens in that case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: EmployeeUpdate) -> Result<Option<Employee>, AppError>;

    /// Permanently deletes a record.
    ///
    /// Returns `Ok(true)` if the record was found and deleted, `Ok(false)`
    /// if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
