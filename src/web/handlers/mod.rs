//! HTML page handlers, one module per user action.

mod dashboard;
mod employees;
mod health;
mod home;
mod login;
mod logout;
mod register;

pub use dashboard::dashboard_handler;
pub use employees::{
    add_employee_handler, delete_employee_handler, update_form_handler, update_submit_handler,
};
pub use health::health_handler;
pub use home::home_handler;
pub use login::{login_page_handler, login_submit_handler};
pub use logout::logout_handler;
pub use register::{register_page_handler, register_submit_handler};
