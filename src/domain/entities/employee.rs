//! Employee directory entry.

use chrono::{DateTime, Utc};

/// A directory record with name, email, and department.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new employee record.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
}

/// Full replacement of an employee record's mutable fields.
///
/// All three fields are overwritten unconditionally; there is no partial
/// update and no email-uniqueness re-check on this path.
#[derive(Debug, Clone)]
pub struct EmployeeUpdate {
    pub name: String,
    pub email: String,
    pub department: String,
}
