//! Service wiring: repositories → services → router.

use std::sync::Arc;

use axum::Router;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use teamgate_accounts::{AccountService, DepartmentService};
use teamgate_auth::{AuthConfig, AuthService};
use teamgate_db::repository::{
    SurrealAccountRepository, SurrealDepartmentRepository, SurrealTokenRepository,
};

use crate::routes;

type Accounts = SurrealAccountRepository<Any>;
type Departments = SurrealDepartmentRepository<Any>;
type Tokens = SurrealTokenRepository<Any>;

/// The concrete service set behind the HTTP surface.
pub struct Services {
    pub auth: AuthService<Accounts, Tokens>,
    pub accounts: AccountService<Accounts, Departments>,
    pub departments: DepartmentService<Departments>,
}

#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
}

/// Build the full HTTP router over an established database connection.
pub fn build_app(db: Surreal<Any>, config: AuthConfig) -> Router {
    let account_repo = match &config.pepper {
        Some(pepper) => SurrealAccountRepository::with_pepper(db.clone(), pepper.clone()),
        None => SurrealAccountRepository::new(db.clone()),
    };
    let department_repo = SurrealDepartmentRepository::new(db.clone());
    let token_repo = SurrealTokenRepository::new(db);

    let services = Services {
        auth: AuthService::new(account_repo.clone(), token_repo, config.clone()),
        accounts: AccountService::new(account_repo, department_repo.clone(), config),
        departments: DepartmentService::new(department_repo),
    };

    routes::router().with_state(AppState {
        services: Arc::new(services),
    })
}
