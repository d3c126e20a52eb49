//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    add_employee_handler, dashboard_handler, delete_employee_handler, home_handler,
    login_page_handler, login_submit_handler, logout_handler, register_page_handler,
    register_submit_handler, update_form_handler, update_submit_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes available without a session.
///
/// # Endpoints
///
/// - `GET  /` - home page
/// - `GET/POST /register` - registration form / create account
/// - `GET/POST /login` - login form / authenticate
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route(
            "/register",
            get(register_page_handler).post(register_submit_handler),
        )
        .route("/login", get(login_page_handler).post(login_submit_handler))
}

/// Session-gated routes.
///
/// Protected via [`crate::web::middleware::web_auth`]; unauthenticated
/// requests are redirected to `/login`.
///
/// # Endpoints
///
/// - `GET  /logout` - end session
/// - `GET  /dashboard` - employee directory listing
/// - `POST /add` - create employee record
/// - `GET  /delete/{id}` - delete employee record
/// - `GET/POST /update/{id}` - edit form / apply edit
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/logout", get(logout_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/add", post(add_employee_handler))
        .route("/delete/{id}", get(delete_employee_handler))
        .route(
            "/update/{id}",
            get(update_form_handler).post(update_submit_handler),
        )
}
