//! SQLite implementation of the employee repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Employee, EmployeeUpdate, NewEmployee};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

/// SQLite repository for employee directory records.
pub struct SqliteEmployeeRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteEmployeeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, email, department, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, department, created_at
            "#,
        )
        .bind(&new_employee.name)
        .bind(&new_employee.email)
        .bind(&new_employee.department)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, email, department, created_at
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, email, department, created_at
            FROM employees
            WHERE email = ?
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(employee)
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, email, department, created_at
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(employees)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, update: EmployeeUpdate) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET name = ?, email = ?, department = ?
            WHERE id = ?
            RETURNING id, name, email, department, created_at
            "#,
        )
        .bind(&update.name)
        .bind(&update.email)
        .bind(&update.department)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(employee)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
