//! SurrealDB implementation of [`AccountRepository`].
//!
//! Raw passwords are hashed with Argon2id before storage (see
//! `teamgate-auth::password`); an optional pepper (server-side secret)
//! can be provided at construction time. Email uniqueness is backed by
//! a unique index.

use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use teamgate_auth::password::hash_password;
use teamgate_core::error::{TeamgateError, TeamgateResult};
use teamgate_core::models::account::{Account, CreateAccount, UpdateAccount};
use teamgate_core::repository::AccountRepository;

use crate::error::DbError;
use crate::repository::next_id;

/// DB-side row struct for queries where the id is already known.
#[derive(Debug, SurrealValue)]
struct AccountRow {
    email: String,
    full_name: String,
    password_hash: String,
    is_staff: bool,
    is_superuser: bool,
    is_active: bool,
    department_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record id via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct AccountRowWithId {
    record_id: i64,
    email: String,
    full_name: String,
    password_hash: String,
    is_staff: bool,
    is_superuser: bool,
    is_active: bool,
    department_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self, id: i64) -> Account {
        Account {
            id,
            email: self.email,
            full_name: self.full_name,
            password_hash: self.password_hash,
            is_staff: self.is_staff,
            is_superuser: self.is_superuser,
            is_active: self.is_active,
            department_id: self.department_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl AccountRowWithId {
    fn into_account(self) -> Account {
        Account {
            id: self.record_id,
            email: self.email,
            full_name: self.full_name,
            password_hash: self.password_hash,
            is_staff: self.is_staff,
            is_superuser: self.is_superuser,
            is_active: self.is_active,
            department_id: self.department_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Translate a creation failure: a unique-index violation on the email
/// column becomes `Duplicate`, anything else stays a database error.
fn creation_error(e: surrealdb::Error) -> DbError {
    let msg = e.to_string();
    if msg.contains("idx_account_email") {
        DbError::Duplicate {
            entity: "account".into(),
            field: "email".into(),
        }
    } else {
        DbError::Migration(msg)
    }
}

/// SurrealDB implementation of the Account repository.
#[derive(Clone)]
pub struct SurrealAccountRepository<C: Connection> {
    db: Surreal<C>,
    /// Optional server-side pepper for password hashing.
    pepper: Option<String>,
}

impl<C: Connection> SurrealAccountRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db, pepper: None }
    }

    pub fn with_pepper(db: Surreal<C>, pepper: String) -> Self {
        Self {
            db,
            pepper: Some(pepper),
        }
    }
}

impl<C: Connection> AccountRepository for SurrealAccountRepository<C> {
    async fn create(&self, input: CreateAccount) -> TeamgateResult<Account> {
        // Fail fast on a taken email; the unique index backstops races.
        match self.get_by_email(&input.email).await {
            Ok(_) => {
                return Err(DbError::Duplicate {
                    entity: "account".into(),
                    field: "email".into(),
                }
                .into());
            }
            Err(TeamgateError::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }

        let id = next_id(&self.db, "account").await?;
        let password_hash = hash_password(&input.password, self.pepper.as_deref())
            .map_err(|e| DbError::Crypto(e.to_string()))?;

        let result = self
            .db
            .query(
                "CREATE type::record('account', $id) SET \
                 email = $email, \
                 full_name = $full_name, \
                 password_hash = $password_hash, \
                 is_staff = $is_staff, \
                 is_superuser = $is_superuser, \
                 is_active = true, \
                 department_id = $department_id",
            )
            .bind(("id", id))
            .bind(("email", input.email))
            .bind(("full_name", input.full_name))
            .bind(("password_hash", password_hash))
            .bind(("is_staff", input.is_staff))
            .bind(("is_superuser", input.is_superuser))
            .bind(("department_id", input.department_id))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(creation_error)?;

        let rows: Vec<AccountRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: id.to_string(),
        })?;

        Ok(row.into_account(id))
    }

    async fn get_by_id(&self, id: i64) -> TeamgateResult<Account> {
        let mut result = self
            .db
            .query("SELECT * FROM type::record('account', $id)")
            .bind(("id", id))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AccountRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: id.to_string(),
        })?;

        Ok(row.into_account(id))
    }

    async fn get_by_email(&self, email: &str) -> TeamgateResult<Account> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM account \
                 WHERE email = $email",
            )
            .bind(("email", email.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AccountRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: format!("email={email}"),
        })?;

        Ok(row.into_account())
    }

    async fn update(&self, id: i64, input: UpdateAccount) -> TeamgateResult<Account> {
        let mut sets = Vec::new();
        if input.full_name.is_some() {
            sets.push("full_name = $full_name");
        }
        if input.email.is_some() {
            sets.push("email = $email");
        }
        if input.department_id.is_some() {
            sets.push("department_id = $department_id");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::record('account', $id) SET {}",
            sets.join(", ")
        );

        let mut builder = self.db.query(&query).bind(("id", id));

        if let Some(full_name) = input.full_name {
            builder = builder.bind(("full_name", full_name));
        }
        if let Some(email) = input.email {
            builder = builder.bind(("email", email));
        }
        if let Some(department_id) = input.department_id {
            // department_id is Option<Option<i64>>: Some(Some(v)) = assign,
            // Some(None) = clear.
            builder = builder.bind(("department_id", department_id));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(creation_error)?;

        let rows: Vec<AccountRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: id.to_string(),
        })?;

        Ok(row.into_account(id))
    }

    async fn delete(&self, id: i64) -> TeamgateResult<()> {
        // Observe absence before deleting; tokens go with the account.
        self.get_by_id(id).await?;

        self.db
            .query(
                "DELETE type::record('account', $id); \
                 DELETE api_token WHERE account_id = $id;",
            )
            .bind(("id", id))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }

    async fn set_password(&self, id: i64, new_password: &str) -> TeamgateResult<()> {
        let password_hash = hash_password(new_password, self.pepper.as_deref())
            .map_err(|e| DbError::Crypto(e.to_string()))?;

        let mut result = self
            .db
            .query(
                "UPDATE type::record('account', $id) SET \
                 password_hash = $password_hash, updated_at = time::now()",
            )
            .bind(("id", id))
            .bind(("password_hash", password_hash))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AccountRow> = result.take(0).map_err(DbError::from)?;
        rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: id.to_string(),
        })?;

        Ok(())
    }

    async fn list(&self) -> TeamgateResult<Vec<Account>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM account \
                 ORDER BY created_at ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AccountRowWithId> = result.take(0).map_err(DbError::from)?;
        Ok(rows.into_iter().map(AccountRowWithId::into_account).collect())
    }
}
