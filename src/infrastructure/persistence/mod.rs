//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using sqlx.
//! The database lives in a single file created on first startup;
//! migrations under `migrations/` are applied at boot.
//!
//! # Repositories
//!
//! - [`SqliteAccountRepository`] - Login account storage
//! - [`SqliteEmployeeRepository`] - Employee record storage
//! - [`SqliteSessionRepository`] - Login session storage

pub mod sqlite_account_repository;
pub mod sqlite_employee_repository;
pub mod sqlite_session_repository;

pub use sqlite_account_repository::SqliteAccountRepository;
pub use sqlite_employee_repository::SqliteEmployeeRepository;
pub use sqlite_session_repository::SqliteSessionRepository;
