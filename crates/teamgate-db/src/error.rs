//! Database-specific error types and conversions.

use teamgate_core::error::TeamgateError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("migration failed: {0}")]
    Migration(String),

    #[error("record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("duplicate {entity}: {field} already taken")]
    Duplicate { entity: String, field: String },

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<DbError> for TeamgateError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => TeamgateError::NotFound { entity, id },
            DbError::Duplicate { entity, .. } => TeamgateError::AlreadyExists { entity },
            other => TeamgateError::Database(other.to_string()),
        }
    }
}
