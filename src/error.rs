//! Application error type and HTTP error page rendering.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

/// Minimal standalone error page.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    reason: &'static str,
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, reason, message, details) = match self {
            AppError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, "Bad Request", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "Not Found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "Conflict", message, details)
            }
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                message,
                details,
            ),
        };

        if status.is_server_error() {
            tracing::error!(%status, %message, %details, "Request failed");
        } else {
            tracing::debug!(%status, %message, %details, "Request rejected");
        }

        (
            status,
            ErrorTemplate {
                status: status.as_u16(),
                reason,
                message,
            },
        )
            .into_response()
    }
}

/// Maps database failures onto the application error taxonomy.
///
/// Unique constraint violations become [`AppError::Conflict`]; everything
/// else surfaces as a generic [`AppError::Internal`] server error. No
/// distinction is made between transient and permanent failures.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        AppError::internal("Database error", json!({ "error": e.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Employee not found", json!({ "id": 7 }));
        assert_eq!(err.to_string(), "Employee not found");
    }

    #[test]
    fn test_constructors_pick_variant() {
        assert!(matches!(
            AppError::conflict("dup", json!({})),
            AppError::Conflict { .. }
        ));
        assert!(matches!(
            AppError::unauthorized("no", json!({})),
            AppError::Unauthorized { .. }
        ));
    }

    #[test]
    fn test_sqlx_row_not_found_maps_to_internal() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
