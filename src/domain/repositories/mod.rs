//! Repository trait definitions for the domain layer.
//!
//! These traits are the dependency-injected store interfaces: they are
//! constructed once at process start and passed into the application
//! services, which never touch the database directly.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AccountRepository`] - Login account storage
//! - [`EmployeeRepository`] - Employee record CRUD operations
//! - [`SessionRepository`] - Login session storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod account_repository;
pub mod employee_repository;
pub mod session_repository;

pub use account_repository::AccountRepository;
pub use employee_repository::EmployeeRepository;
pub use session_repository::SessionRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
