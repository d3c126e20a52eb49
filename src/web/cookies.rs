//! Session cookie names and header helpers.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Name of the session cookie holding the opaque login token.
pub const SESSION_COOKIE: &str = "session_token";

/// Extracts a single cookie value from the `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and matching the
/// requested key; other cookies are ignored.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name => Some(value.to_string()),
                _ => None,
            }
        })
}

/// `Set-Cookie` value establishing a login session.
pub fn session_cookie(token: &str, max_age_hours: i64) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        max_age_hours * 3600
    )
}

/// `Set-Cookie` value removing the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
