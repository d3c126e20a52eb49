//! Dashboard page handler: the employee directory listing.

use askama::Template;
use askama_web::WebTemplate;
use axum::Extension;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Response};

use crate::domain::entities::Employee;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::Flash;
use crate::web::middleware::web_auth::CurrentAccount;

/// Template for the directory listing with the add-employee form.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    username: String,
    employees: Vec<Employee>,
    flash: Option<Flash>,
}

/// Renders the employee directory.
///
/// # Endpoint
///
/// `GET /dashboard` (gated)
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let employees = state.employee_service.list().await?;
    let flash = Flash::from_request_headers(&headers);

    Ok((
        AppendHeaders([(SET_COOKIE, Flash::clear_cookie())]),
        DashboardTemplate {
            username: account.username,
            employees,
            flash,
        },
    )
        .into_response())
}
