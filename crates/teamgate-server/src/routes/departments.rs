//! Department administration endpoints (superuser only).

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use teamgate_core::Caller;
use teamgate_core::models::department::Department;

use crate::errors;
use crate::extract::CurrentAccount;
use crate::state::AppState;

/// The department label travels under the wire key `department`.
#[derive(Debug, Deserialize)]
pub struct CreateDepartmentRequest {
    #[serde(default)]
    pub department: String,
}

#[derive(Debug, Serialize)]
pub struct DepartmentResponse {
    pub id: i64,
    pub department: String,
}

impl DepartmentResponse {
    fn from_department(department: &Department) -> Self {
        Self {
            id: department.id,
            department: department.name.clone(),
        }
    }
}

/// GET /departments/
pub async fn list(State(state): State<AppState>, CurrentAccount(caller): CurrentAccount) -> Response {
    match state
        .services
        .departments
        .list(&Caller::Authenticated(caller))
        .await
    {
        Ok(departments) => Json(
            departments
                .iter()
                .map(DepartmentResponse::from_department)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

/// POST /departments/
pub async fn create(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    Json(body): Json<CreateDepartmentRequest>,
) -> Response {
    match state
        .services
        .departments
        .create(&Caller::Authenticated(caller), &body.department)
        .await
    {
        Ok(department) => (
            StatusCode::CREATED,
            Json(DepartmentResponse::from_department(&department)),
        )
            .into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

/// DELETE /departments/:id/delete/ — cascades to member accounts.
pub async fn delete(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    Path(id): Path<i64>,
) -> Response {
    match state
        .services
        .departments
        .delete(&Caller::Authenticated(caller), id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::error_to_response(e),
    }
}
