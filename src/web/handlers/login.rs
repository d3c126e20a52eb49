//! Login page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookies::session_cookie;
use crate::web::flash::{Flash, flash_redirect};

/// Template for the login form.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    flash: Option<Flash>,
}

/// Form fields consumed by the login action.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Renders the login form.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler(headers: HeaderMap) -> impl IntoResponse {
    let flash = Flash::from_request_headers(&headers);
    (
        AppendHeaders([(SET_COOKIE, Flash::clear_cookie())]),
        LoginTemplate { flash },
    )
}

/// Authenticates credentials and starts a session.
///
/// # Endpoint
///
/// `POST /login`
///
/// On success the session cookie is set and the user lands on the
/// dashboard. Bad credentials redirect back to the form with a single
/// indistinct warning.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match state
        .auth_service
        .login(&form.username, &form.password)
        .await
    {
        Ok(token) => {
            let cookie = session_cookie(&token, state.auth_service.session_ttl_hours());
            Ok((
                AppendHeaders([(SET_COOKIE, cookie)]),
                Redirect::to("/dashboard"),
            )
                .into_response())
        }
        Err(AppError::Unauthorized { .. }) => Ok(flash_redirect(
            Flash::danger("Invalid username or password"),
            "/login",
        )),
        Err(e) => Err(e),
    }
}
