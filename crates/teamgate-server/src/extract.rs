//! Bearer-token authentication extractor.
//!
//! The credential is carried as `Authorization: Token <value>`; the
//! extractor resolves it to an account and rejects with 401 otherwise.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION, request::Parts};
use axum::response::Response;
use teamgate_core::models::account::Account;

use crate::errors;
use crate::state::AppState;

/// The authenticated account behind the request's bearer token.
pub struct CurrentAccount(pub Account);

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            errors::json_error(
                StatusCode::UNAUTHORIZED,
                "unauthenticated",
                "Authentication credentials were not provided.",
            )
        })?;

        let account = state.services.auth.authenticate(token).await.map_err(|_| {
            errors::json_error(StatusCode::UNAUTHORIZED, "unauthenticated", "Invalid token.")
        })?;

        Ok(CurrentAccount(account))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Token ")?.trim();
    (!token.is_empty()).then_some(token)
}
