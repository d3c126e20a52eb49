//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, EmployeeService};
use crate::infrastructure::persistence::{
    SqliteAccountRepository, SqliteEmployeeRepository, SqliteSessionRepository,
};

/// Services constructed once at startup and shared across all handlers.
///
/// Handlers never see the database pool; all access goes through the
/// repository-backed services.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<SqliteAccountRepository, SqliteSessionRepository>>,
    pub employee_service: Arc<EmployeeService<SqliteEmployeeRepository>>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService<SqliteAccountRepository, SqliteSessionRepository>>,
        employee_service: Arc<EmployeeService<SqliteEmployeeRepository>>,
    ) -> Self {
        Self {
            auth_service,
            employee_service,
        }
    }
}
