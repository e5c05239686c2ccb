//! Department domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A department groups accounts. Deleting one hard-cascades to every
/// member account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateDepartment {
    /// Non-empty label; the store rejects the empty string.
    pub name: String,
}
