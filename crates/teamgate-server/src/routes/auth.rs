//! Token issuance endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use teamgate_core::error::TeamgateError;

use crate::errors;
use crate::state::AppState;

/// Credentials in the body; `username` carries the email.
#[derive(Debug, Deserialize)]
pub struct ObtainTokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /api-token-auth/
pub async fn obtain_token(
    State(state): State<AppState>,
    Json(body): Json<ObtainTokenRequest>,
) -> Response {
    match state
        .services
        .auth
        .obtain_token(&body.username, &body.password)
        .await
    {
        Ok(output) => Json(TokenResponse {
            token: output.token,
        })
        .into_response(),
        // Bad credentials are a payload failure here, not a 401.
        Err(TeamgateError::AuthenticationFailed { .. }) => errors::field_error(
            StatusCode::BAD_REQUEST,
            "non_field_errors",
            "Unable to log in with provided credentials.",
        ),
        Err(e) => errors::error_to_response(e),
    }
}
