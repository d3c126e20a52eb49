//! Logout handler.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookies::{SESSION_COOKIE, clear_session_cookie, read_cookie};
use crate::web::flash::Flash;

/// Ends the current session.
///
/// # Endpoint
///
/// `GET /logout` (gated)
///
/// Deletes the server-side session, clears the cookie, and sends the user
/// back to the home page.
pub async fn logout_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(token) = read_cookie(&headers, SESSION_COOKIE) {
        state.auth_service.logout(&token).await?;
    }

    Ok((
        AppendHeaders([
            (SET_COOKIE, clear_session_cookie()),
            (SET_COOKIE, Flash::info("Logged out successfully").to_set_cookie()),
        ]),
        Redirect::to("/"),
    )
        .into_response())
}
