//! Handlers for employee record mutations (add, update, delete).

use askama::Template;
use askama_web::WebTemplate;
use axum::Extension;
use axum::Form;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Response};
use serde::Deserialize;

use crate::domain::entities::{Employee, EmployeeUpdate, NewEmployee};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::{Flash, flash_redirect};
use crate::web::middleware::web_auth::CurrentAccount;

/// Template for the employee edit form.
#[derive(Template, WebTemplate)]
#[template(path = "update.html")]
struct UpdateTemplate {
    employee: Employee,
    flash: Option<Flash>,
}

/// Form fields consumed by the add and update actions.
#[derive(Debug, Deserialize)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub department: String,
}

/// Creates an employee record.
///
/// # Endpoint
///
/// `POST /add` (gated)
///
/// A duplicate email is a warning, not a failure: the request redirects
/// to the dashboard with no state change.
pub async fn add_employee_handler(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Form(form): Form<EmployeeForm>,
) -> Result<Response, AppError> {
    let result = state
        .employee_service
        .add(NewEmployee {
            name: form.name,
            email: form.email,
            department: form.department,
        })
        .await;

    match result {
        Ok(employee) => {
            tracing::info!(account = %account.username, id = employee.id, "Employee added");
            Ok(flash_redirect(Flash::success("Employee added"), "/dashboard"))
        }
        Err(AppError::Conflict { .. }) => Ok(flash_redirect(
            Flash::warning("Employee with this email already exists"),
            "/dashboard",
        )),
        Err(e) => Err(e),
    }
}

/// Deletes an employee record.
///
/// # Endpoint
///
/// `GET /delete/{id}` (gated)
///
/// # Errors
///
/// Returns 404 Not Found if no record matches `id`.
pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    state.employee_service.delete(id).await?;

    tracing::info!(account = %account.username, id, "Employee deleted");
    Ok(flash_redirect(Flash::info("Employee deleted"), "/dashboard"))
}

/// Renders the edit form for one employee record.
///
/// # Endpoint
///
/// `GET /update/{id}` (gated)
///
/// # Errors
///
/// Returns 404 Not Found if no record matches `id`.
pub async fn update_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let employee = state.employee_service.get(id).await?;
    let flash = Flash::from_request_headers(&headers);

    Ok((
        AppendHeaders([(SET_COOKIE, Flash::clear_cookie())]),
        UpdateTemplate { employee, flash },
    )
        .into_response())
}

/// Overwrites all three fields of an employee record.
///
/// # Endpoint
///
/// `POST /update/{id}` (gated)
///
/// No email-uniqueness re-check happens here; see
/// [`crate::application::services::EmployeeService::update`].
///
/// # Errors
///
/// Returns 404 Not Found if no record matches `id`.
pub async fn update_submit_handler(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Path(id): Path<i64>,
    Form(form): Form<EmployeeForm>,
) -> Result<Response, AppError> {
    state
        .employee_service
        .update(
            id,
            EmployeeUpdate {
                name: form.name,
                email: form.email,
                department: form.department,
            },
        )
        .await?;

    tracing::info!(account = %account.username, id, "Employee updated");
    Ok(flash_redirect(Flash::success("Employee updated"), "/dashboard"))
}
