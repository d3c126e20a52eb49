//! Core domain entities.

pub mod account;
pub mod employee;
pub mod session;

pub use account::{Account, NewAccount};
pub use employee::{Employee, EmployeeUpdate, NewEmployee};
pub use session::{NewSession, Session};
