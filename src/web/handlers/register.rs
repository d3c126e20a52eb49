//! Registration page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Response};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::{Flash, flash_redirect};

/// Template for the registration form.
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
struct RegisterTemplate {
    flash: Option<Flash>,
}

/// Form fields consumed by the registration action.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

/// Renders the registration form.
///
/// # Endpoint
///
/// `GET /register`
pub async fn register_page_handler(headers: HeaderMap) -> impl IntoResponse {
    let flash = Flash::from_request_headers(&headers);
    (
        AppendHeaders([(SET_COOKIE, Flash::clear_cookie())]),
        RegisterTemplate { flash },
    )
}

/// Creates a new account.
///
/// # Endpoint
///
/// `POST /register`
///
/// A taken username is a warning, not a failure: the request redirects
/// back to the form with no state change. On success the user lands on
/// the login page.
pub async fn register_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    match state
        .auth_service
        .register(&form.username, &form.password)
        .await
    {
        Ok(()) => Ok(flash_redirect(
            Flash::success("User created successfully"),
            "/login",
        )),
        Err(AppError::Conflict { .. }) => Ok(flash_redirect(
            Flash::warning("User already exists"),
            "/register",
        )),
        Err(e) => Err(e),
    }
}
