//! Business logic services for the application layer.

pub mod auth_service;
pub mod employee_service;

pub use auth_service::AuthService;
pub use employee_service::EmployeeService;
