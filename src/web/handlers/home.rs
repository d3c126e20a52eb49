//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};

use crate::web::flash::Flash;

/// Template for the landing page.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
struct HomeTemplate {
    flash: Option<Flash>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(headers: HeaderMap) -> impl IntoResponse {
    let flash = Flash::from_request_headers(&headers);
    (
        AppendHeaders([(SET_COOKIE, Flash::clear_cookie())]),
        HomeTemplate { flash },
    )
}
