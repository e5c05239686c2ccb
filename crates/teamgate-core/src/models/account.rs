//! Account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    /// Login identifier; unique across all accounts.
    pub email: String,
    pub full_name: String,
    /// Argon2id PHC-format hash. Never serialized out of the system.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Staff override over department/ownership scoping.
    pub is_staff: bool,
    /// Administrator flag; required for department management.
    pub is_superuser: bool,
    pub is_active: bool,
    /// At most one department per account.
    pub department_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub email: String,
    pub full_name: String,
    /// Raw password (hashed with Argon2id before storage).
    pub password: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub department_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAccount {
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// `Some(Some(id))` = assign, `Some(None)` = clear, `None` = no change.
    pub department_id: Option<Option<i64>>,
}
