//! Employee directory operations.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Employee, EmployeeUpdate, NewEmployee};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

/// Service for listing and mutating employee records.
pub struct EmployeeService<E: EmployeeRepository> {
    repository: Arc<E>,
}

impl<E: EmployeeRepository> EmployeeService<E> {
    /// Creates a new employee service.
    pub fn new(repository: Arc<E>) -> Self {
        Self { repository }
    }

    /// Returns all records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.repository.list().await
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Fetches a single record for the edit form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `id`.
    pub async fn get(&self, id: i64) -> Result<Employee, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| employee_not_found(id))
    }

    /// Creates a record unless the email is already present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if another record holds the same
    /// email; the caller surfaces this as a warning and nothing changes.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        if self
            .repository
            .find_by_email(&new_employee.email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Employee with this email already exists",
                json!({ "email": new_employee.email }),
            ));
        }

        let employee = self.repository.create(new_employee).await?;
        tracing::info!(id = employee.id, "Employee added");
        Ok(employee)
    }

    /// Overwrites all three fields of a record.
    ///
    /// Unlike [`add`](Self::add), no email-uniqueness check runs here, so
    /// an update can introduce a duplicate email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `id`; nothing
    /// is mutated in that case.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, id: i64, update: EmployeeUpdate) -> Result<Employee, AppError> {
        let employee = self
            .repository
            .update(id, update)
            .await?
            .ok_or_else(|| employee_not_found(id))?;

        tracing::info!(id, "Employee updated");
        Ok(employee)
    }

    /// Permanently deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `id`.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(employee_not_found(id));
        }

        tracing::info!(id, "Employee deleted");
        Ok(())
    }
}

fn employee_not_found(id: i64) -> AppError {
    AppError::not_found("Employee not found", json!({ "id": id }))
}
