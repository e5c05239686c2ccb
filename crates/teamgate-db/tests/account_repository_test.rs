//! Integration tests for the Account repository using in-memory
//! SurrealDB.

use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use teamgate_core::error::TeamgateError;
use teamgate_core::models::account::{CreateAccount, UpdateAccount};
use teamgate_core::models::department::CreateDepartment;
use teamgate_core::repository::{AccountRepository, DepartmentRepository};
use teamgate_db::repository::{SurrealAccountRepository, SurrealDepartmentRepository};
use teamgate_db::verify_password;

/// Helper: spin up in-memory DB, run migrations, create a department.
async fn setup() -> (Surreal<surrealdb::engine::local::Db>, i64) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    teamgate_db::run_migrations(&db).await.unwrap();

    let department_repo = SurrealDepartmentRepository::new(db.clone());
    let department = department_repo
        .create(CreateDepartment {
            name: "Creation".into(),
        })
        .await
        .unwrap();

    (db, department.id)
}

fn new_account(email: &str, department_id: Option<i64>) -> CreateAccount {
    CreateAccount {
        email: email.into(),
        full_name: "Test User".into(),
        password: "123ABC8a".into(),
        is_staff: false,
        is_superuser: false,
        department_id,
    }
}

#[tokio::test]
async fn create_and_get_account() {
    let (db, department_id) = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let account = repo
        .create(new_account("alice@example.com", Some(department_id)))
        .await
        .unwrap();

    assert_eq!(account.email, "alice@example.com");
    assert_eq!(account.full_name, "Test User");
    assert_eq!(account.department_id, Some(department_id));
    assert!(account.is_active);
    assert!(!account.is_staff);
    assert!(!account.is_superuser);

    // Password is hashed, not stored in plaintext.
    assert_ne!(account.password_hash, "123ABC8a");
    assert!(account.password_hash.starts_with("$argon2id$"));

    let fetched = repo.get_by_id(account.id).await.unwrap();
    assert_eq!(fetched.id, account.id);
    assert_eq!(fetched.email, "alice@example.com");
}

#[tokio::test]
async fn ids_are_assigned_sequentially() {
    let (db, department_id) = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let first = repo
        .create(new_account("a@example.com", Some(department_id)))
        .await
        .unwrap();
    let second = repo
        .create(new_account("b@example.com", Some(department_id)))
        .await
        .unwrap();

    assert_eq!(second.id, first.id + 1);
}

#[tokio::test]
async fn get_by_email() {
    let (db, department_id) = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let account = repo
        .create(new_account("bob@example.com", Some(department_id)))
        .await
        .unwrap();

    let fetched = repo.get_by_email("bob@example.com").await.unwrap();
    assert_eq!(fetched.id, account.id);

    let missing = repo.get_by_email("nobody@example.com").await;
    assert!(matches!(missing, Err(TeamgateError::NotFound { .. })));
}

#[tokio::test]
async fn duplicate_email_rejected() {
    let (db, department_id) = setup().await;
    let repo = SurrealAccountRepository::new(db);

    repo.create(new_account("same@example.com", Some(department_id)))
        .await
        .unwrap();

    let result = repo
        .create(new_account("same@example.com", Some(department_id)))
        .await;

    assert!(matches!(result, Err(TeamgateError::AlreadyExists { .. })));
}

#[tokio::test]
async fn password_verification() {
    let (db, department_id) = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let account = repo
        .create(new_account("carol@example.com", Some(department_id)))
        .await
        .unwrap();

    assert!(verify_password("123ABC8a", &account.password_hash, None).unwrap());
    assert!(!verify_password("123ABC8b", &account.password_hash, None).unwrap());
}

#[tokio::test]
async fn password_with_pepper() {
    let (db, department_id) = setup().await;
    let pepper = "server-secret-pepper".to_string();
    let repo = SurrealAccountRepository::with_pepper(db, pepper.clone());

    let account = repo
        .create(new_account("dave@example.com", Some(department_id)))
        .await
        .unwrap();

    assert!(verify_password("123ABC8a", &account.password_hash, Some(&pepper)).unwrap());
    assert!(!verify_password("123ABC8a", &account.password_hash, None).unwrap());
}

#[tokio::test]
async fn update_account_fields() {
    let (db, department_id) = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let account = repo
        .create(new_account("eve@example.com", Some(department_id)))
        .await
        .unwrap();

    let updated = repo
        .update(
            account.id,
            UpdateAccount {
                full_name: Some("Eve Updated".into()),
                email: Some("eve_updated@example.com".into()),
                department_id: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.full_name, "Eve Updated");
    assert_eq!(updated.email, "eve_updated@example.com");
    // Department untouched when not supplied.
    assert_eq!(updated.department_id, Some(department_id));
}

#[tokio::test]
async fn update_can_clear_department() {
    let (db, department_id) = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let account = repo
        .create(new_account("frank@example.com", Some(department_id)))
        .await
        .unwrap();

    let updated = repo
        .update(
            account.id,
            UpdateAccount {
                department_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.department_id, None);
}

#[tokio::test]
async fn update_missing_account_is_not_found() {
    let (db, _department_id) = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let result = repo
        .update(
            999,
            UpdateAccount {
                full_name: Some("Ghost".into()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(TeamgateError::NotFound { .. })));
}

#[tokio::test]
async fn set_password_replaces_credential() {
    let (db, department_id) = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let account = repo
        .create(new_account("grace@example.com", Some(department_id)))
        .await
        .unwrap();

    repo.set_password(account.id, "456DEF9b").await.unwrap();

    let fetched = repo.get_by_id(account.id).await.unwrap();
    assert!(verify_password("456DEF9b", &fetched.password_hash, None).unwrap());
    assert!(!verify_password("123ABC8a", &fetched.password_hash, None).unwrap());
}

#[tokio::test]
async fn delete_account() {
    let (db, department_id) = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let account = repo
        .create(new_account("henry@example.com", Some(department_id)))
        .await
        .unwrap();

    repo.delete(account.id).await.unwrap();

    let result = repo.get_by_id(account.id).await;
    assert!(matches!(result, Err(TeamgateError::NotFound { .. })));

    let again = repo.delete(account.id).await;
    assert!(matches!(again, Err(TeamgateError::NotFound { .. })));
}

#[tokio::test]
async fn list_accounts() {
    let (db, department_id) = setup().await;
    let repo = SurrealAccountRepository::new(db);

    for i in 0..3 {
        repo.create(new_account(
            &format!("user-{i}@example.com"),
            Some(department_id),
        ))
        .await
        .unwrap();
    }

    let accounts = repo.list().await.unwrap();
    assert_eq!(accounts.len(), 3);
}
