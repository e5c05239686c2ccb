//! HTTP routes, one module per domain area.

use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::state::AppState;

pub mod auth;
pub mod departments;
pub mod users;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/create", post(users::create_open))
        .route("/users/", post(users::create_authenticated))
        .route("/users/:id/profile/", get(users::profile))
        .route("/users/:id/detail/", get(users::detail))
        .route("/users/:id/update/", put(users::update))
        .route("/users/:id/change_password/", put(users::change_password))
        .route("/users/:id/delete/", delete(users::delete))
        .route(
            "/departments/",
            get(departments::list).post(departments::create),
        )
        .route("/departments/:id/delete/", delete(departments::delete))
        .route("/api-token-auth/", post(auth::obtain_token))
}
