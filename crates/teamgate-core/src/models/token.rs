//! API token domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored bearer credential. Only the SHA-256 hash of the raw token
/// is persisted; the raw value is returned to the client once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiToken {
    pub id: i64,
    pub account_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateApiToken {
    pub account_id: i64,
    pub token_hash: String,
}
