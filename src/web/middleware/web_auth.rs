//! Cookie-based authentication middleware for the gated pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;
use crate::web::cookies::{SESSION_COOKIE, read_cookie};

/// The authenticated account for the current request.
///
/// Inserted as a request extension by [`layer`] so handlers receive their
/// identity explicitly instead of reading ambient state.
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub id: i64,
    pub username: String,
}

/// Authenticates gated requests using the session cookie.
///
/// # Authentication Flow
///
/// 1. Extract the `session_token` cookie from the request
/// 2. Resolve it to an account via
///    [`crate::application::services::AuthService::authenticate`]
/// 3. On success, insert [`CurrentAccount`] and continue to the handler
/// 4. On failure or missing cookie, redirect to `/login`
///
/// A browser user is redirected rather than shown an error page;
/// unauthenticated access to a gated action is a navigation event, not a
/// fault.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let token = read_cookie(req.headers(), SESSION_COOKIE);

    match token {
        Some(token) => match st.auth_service.authenticate(&token).await {
            Ok(account) => {
                req.extensions_mut().insert(CurrentAccount {
                    id: account.id,
                    username: account.username,
                });
                Ok(next.run(req).await)
            }
            Err(_) => Err(Redirect::to("/login")),
        },
        None => Err(Redirect::to("/login")),
    }
}
