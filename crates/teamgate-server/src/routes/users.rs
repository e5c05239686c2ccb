//! User account endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use teamgate_accounts::{ChangePasswordInput, RegisterInput, UpdateProfileInput};
use teamgate_core::Caller;
use teamgate_core::error::TeamgateError;
use teamgate_core::models::account::Account;

use crate::errors;
use crate::extract::CurrentAccount;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub department: Option<i64>,
}

/// Registration/update response: the account without its credential.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub department: Option<i64>,
}

impl UserResponse {
    fn from_account(account: &Account) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            department: account.department_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub id: i64,
    pub full_name: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileDetail {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub department: Option<i64>,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub old_password: Option<String>,
    #[serde(default)]
    pub new_password: Option<String>,
}

/// POST /users/create — open registration.
pub async fn create_open(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Response {
    register(state, Caller::Anonymous, body).await
}

/// POST /users/ — the same flow behind a token.
pub async fn create_authenticated(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    Json(body): Json<CreateUserRequest>,
) -> Response {
    register(state, Caller::Authenticated(caller), body).await
}

async fn register(state: AppState, caller: Caller, body: CreateUserRequest) -> Response {
    let input = RegisterInput {
        full_name: body.full_name,
        email: body.email,
        password: body.password,
        department: body.department,
    };
    match state.services.accounts.register(&caller, input).await {
        Ok(account) => (
            StatusCode::CREATED,
            Json(UserResponse::from_account(&account)),
        )
            .into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

/// GET /users/:id/profile/ — id and full name only.
pub async fn profile(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    Path(id): Path<i64>,
) -> Response {
    match state
        .services
        .accounts
        .get(&Caller::Authenticated(caller), id)
        .await
    {
        Ok(account) => Json([ProfileSummary {
            id: account.id,
            full_name: account.full_name,
        }])
        .into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

/// GET /users/:id/detail/ — every field except the credential.
pub async fn detail(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    Path(id): Path<i64>,
) -> Response {
    match state
        .services
        .accounts
        .get(&Caller::Authenticated(caller), id)
        .await
    {
        Ok(account) => Json([ProfileDetail {
            id: account.id,
            full_name: account.full_name,
            email: account.email,
            department: account.department_id,
            is_staff: account.is_staff,
            is_superuser: account.is_superuser,
            is_active: account.is_active,
        }])
        .into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

/// PUT /users/:id/update/
pub async fn update(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    Path(id): Path<i64>,
    Json(body): Json<UpdateProfileRequest>,
) -> Response {
    let input = UpdateProfileInput {
        full_name: body.full_name,
        email: body.email,
        department: body.department,
    };
    match state
        .services
        .accounts
        .update_profile(&Caller::Authenticated(caller), id, input)
        .await
    {
        Ok(account) => Json(UserResponse::from_account(&account)).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

/// PUT /users/:id/change_password/
pub async fn change_password(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    Path(id): Path<i64>,
    Json(body): Json<ChangePasswordRequest>,
) -> Response {
    let input = ChangePasswordInput {
        old_password: body.old_password,
        new_password: body.new_password,
    };
    match state
        .services
        .accounts
        .change_password(&Caller::Authenticated(caller), id, input)
        .await
    {
        Ok(()) => Json(json!({ "message": "Password updated successfully" })).into_response(),
        // A bad id is a payload failure on this path, not a missing page.
        Err(TeamgateError::NotFound { .. }) => {
            errors::field_error(StatusCode::BAD_REQUEST, "id", "Account not found.")
        }
        Err(e) => errors::error_to_response(e),
    }
}

/// DELETE /users/:id/delete/
pub async fn delete(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    Path(id): Path<i64>,
) -> Response {
    match state
        .services
        .accounts
        .delete(&Caller::Authenticated(caller), id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::error_to_response(e),
    }
}
