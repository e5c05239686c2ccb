//! Error types for the Teamgate system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TeamgateError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("{entity} already exists")]
    AlreadyExists { entity: String },

    #[error("authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("authorization denied: {reason}")]
    AuthorizationDenied { reason: String },

    #[error("validation failed on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl TeamgateError {
    /// Field-keyed validation failure, the shape every malformed-payload
    /// error takes on its way to a 400 response.
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

}

pub type TeamgateResult<T> = Result<T, TeamgateError>;
