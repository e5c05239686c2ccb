//! Consistent JSON error responses and core-error → HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use teamgate_core::error::TeamgateError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Field-keyed validation body: `{"<field>": "<message>"}`.
pub fn field_error(status: StatusCode, field: &str, message: &str) -> Response {
    (status, Json(json!({ field: message }))).into_response()
}

pub fn error_to_response(err: TeamgateError) -> Response {
    match err {
        TeamgateError::Validation { field, message } => {
            field_error(StatusCode::BAD_REQUEST, &field, &message)
        }
        TeamgateError::AlreadyExists { entity } => field_error(
            StatusCode::BAD_REQUEST,
            "email",
            &format!("{entity} already exists"),
        ),
        TeamgateError::NotFound { .. } => {
            json_error(StatusCode::NOT_FOUND, "not_found", "Not found.")
        }
        TeamgateError::AuthenticationFailed { reason } => {
            json_error(StatusCode::UNAUTHORIZED, "unauthenticated", reason)
        }
        TeamgateError::AuthorizationDenied { reason } => {
            json_error(StatusCode::FORBIDDEN, "forbidden", reason)
        }
        TeamgateError::Database(msg) | TeamgateError::Internal(msg) => {
            tracing::error!(error = %msg, "request failed");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "Internal server error.",
            )
        }
    }
}
