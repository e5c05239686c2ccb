//! Integration tests for the Department repository using in-memory
//! SurrealDB, including the delete cascade.

use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use teamgate_core::error::TeamgateError;
use teamgate_core::models::account::CreateAccount;
use teamgate_core::models::department::CreateDepartment;
use teamgate_core::models::token::CreateApiToken;
use teamgate_core::repository::{AccountRepository, DepartmentRepository, TokenRepository};
use teamgate_db::repository::{
    SurrealAccountRepository, SurrealDepartmentRepository, SurrealTokenRepository,
};

async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    teamgate_db::run_migrations(&db).await.unwrap();
    db
}

fn member(email: &str, department_id: i64) -> CreateAccount {
    CreateAccount {
        email: email.into(),
        full_name: "Member User".into(),
        password: "123ABC8a".into(),
        is_staff: false,
        is_superuser: false,
        department_id: Some(department_id),
    }
}

#[tokio::test]
async fn create_and_get_department() {
    let db = setup().await;
    let repo = SurrealDepartmentRepository::new(db);

    let department = repo
        .create(CreateDepartment {
            name: "Development".into(),
        })
        .await
        .unwrap();

    assert_eq!(department.name, "Development");

    let fetched = repo.get_by_id(department.id).await.unwrap();
    assert_eq!(fetched.id, department.id);
    assert_eq!(fetched.name, "Development");
}

#[tokio::test]
async fn empty_name_rejected() {
    let db = setup().await;
    let repo = SurrealDepartmentRepository::new(db);

    let result = repo.create(CreateDepartment { name: String::new() }).await;

    match result {
        Err(TeamgateError::Validation { field, .. }) => assert_eq!(field, "department"),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn list_departments_in_creation_order() {
    let db = setup().await;
    let repo = SurrealDepartmentRepository::new(db);

    for name in ["Creation", "Development", "Security"] {
        repo.create(CreateDepartment { name: name.into() })
            .await
            .unwrap();
    }

    let departments = repo.list().await.unwrap();
    let names: Vec<_> = departments.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Creation", "Development", "Security"]);
}

#[tokio::test]
async fn delete_missing_department_is_not_found() {
    let db = setup().await;
    let repo = SurrealDepartmentRepository::new(db);

    let result = repo.delete(42).await;
    assert!(matches!(result, Err(TeamgateError::NotFound { .. })));
}

#[tokio::test]
async fn delete_cascades_to_member_accounts() {
    let db = setup().await;
    let department_repo = SurrealDepartmentRepository::new(db.clone());
    let account_repo = SurrealAccountRepository::new(db.clone());
    let token_repo = SurrealTokenRepository::new(db);

    let doomed = department_repo
        .create(CreateDepartment {
            name: "Doomed".into(),
        })
        .await
        .unwrap();
    let survivor = department_repo
        .create(CreateDepartment {
            name: "Survivor".into(),
        })
        .await
        .unwrap();

    let member_a = account_repo
        .create(member("a@example.com", doomed.id))
        .await
        .unwrap();
    let member_b = account_repo
        .create(member("b@example.com", doomed.id))
        .await
        .unwrap();
    let outsider = account_repo
        .create(member("c@example.com", survivor.id))
        .await
        .unwrap();

    // A token held by a member must disappear with the cascade.
    token_repo
        .create(CreateApiToken {
            account_id: member_a.id,
            token_hash: "abc123".into(),
        })
        .await
        .unwrap();

    department_repo.delete(doomed.id).await.unwrap();

    assert!(matches!(
        department_repo.get_by_id(doomed.id).await,
        Err(TeamgateError::NotFound { .. })
    ));
    assert!(matches!(
        account_repo.get_by_id(member_a.id).await,
        Err(TeamgateError::NotFound { .. })
    ));
    assert!(matches!(
        account_repo.get_by_id(member_b.id).await,
        Err(TeamgateError::NotFound { .. })
    ));
    assert!(matches!(
        token_repo.get_by_hash("abc123").await,
        Err(TeamgateError::NotFound { .. })
    ));

    // Members of other departments are untouched.
    assert!(account_repo.get_by_id(outsider.id).await.is_ok());
    assert!(department_repo.get_by_id(survivor.id).await.is_ok());
}
