//! SurrealDB implementation of [`TokenRepository`].

use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use teamgate_core::error::TeamgateResult;
use teamgate_core::models::token::{ApiToken, CreateApiToken};
use teamgate_core::repository::TokenRepository;

use crate::error::DbError;
use crate::repository::next_id;

#[derive(Debug, SurrealValue)]
struct TokenRow {
    account_id: i64,
    token_hash: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct TokenRowWithId {
    record_id: i64,
    account_id: i64,
    token_hash: String,
    created_at: DateTime<Utc>,
}

/// SurrealDB implementation of the ApiToken repository.
#[derive(Clone)]
pub struct SurrealTokenRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealTokenRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> TokenRepository for SurrealTokenRepository<C> {
    async fn create(&self, input: CreateApiToken) -> TeamgateResult<ApiToken> {
        let id = next_id(&self.db, "api_token").await?;

        let result = self
            .db
            .query(
                "CREATE type::record('api_token', $id) SET \
                 account_id = $account_id, token_hash = $token_hash",
            )
            .bind(("id", id))
            .bind(("account_id", input.account_id))
            .bind(("token_hash", input.token_hash))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Migration(e.to_string()))?;

        let rows: Vec<TokenRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "api_token".into(),
            id: id.to_string(),
        })?;

        Ok(ApiToken {
            id,
            account_id: row.account_id,
            token_hash: row.token_hash,
            created_at: row.created_at,
        })
    }

    async fn get_by_hash(&self, token_hash: &str) -> TeamgateResult<ApiToken> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM api_token \
                 WHERE token_hash = $token_hash",
            )
            .bind(("token_hash", token_hash.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<TokenRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "api_token".into(),
            id: "token_hash=<redacted>".into(),
        })?;

        Ok(ApiToken {
            id: row.record_id,
            account_id: row.account_id,
            token_hash: row.token_hash,
            created_at: row.created_at,
        })
    }

    async fn delete_for_account(&self, account_id: i64) -> TeamgateResult<()> {
        self.db
            .query("DELETE api_token WHERE account_id = $account_id")
            .bind(("account_id", account_id))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
