//! SurrealDB implementation of [`DepartmentRepository`].
//!
//! Department deletion hard-cascades: member accounts and their tokens
//! are removed in the same request.

use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use teamgate_core::error::{TeamgateError, TeamgateResult};
use teamgate_core::models::department::{CreateDepartment, Department};
use teamgate_core::repository::DepartmentRepository;

use crate::error::DbError;
use crate::repository::next_id;

#[derive(Debug, SurrealValue)]
struct DepartmentRow {
    name: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct DepartmentRowWithId {
    record_id: i64,
    name: String,
    created_at: DateTime<Utc>,
}

/// SurrealDB implementation of the Department repository.
#[derive(Clone)]
pub struct SurrealDepartmentRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealDepartmentRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> DepartmentRepository for SurrealDepartmentRepository<C> {
    async fn create(&self, input: CreateDepartment) -> TeamgateResult<Department> {
        // Store-level constraint; the schema ASSERT backstops it.
        if input.name.is_empty() {
            return Err(TeamgateError::validation(
                "department",
                "This field may not be blank.",
            ));
        }

        let id = next_id(&self.db, "department").await?;

        let result = self
            .db
            .query("CREATE type::record('department', $id) SET name = $name")
            .bind(("id", id))
            .bind(("name", input.name))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Migration(e.to_string()))?;

        let rows: Vec<DepartmentRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "department".into(),
            id: id.to_string(),
        })?;

        Ok(Department {
            id,
            name: row.name,
            created_at: row.created_at,
        })
    }

    async fn get_by_id(&self, id: i64) -> TeamgateResult<Department> {
        let mut result = self
            .db
            .query("SELECT * FROM type::record('department', $id)")
            .bind(("id", id))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<DepartmentRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "department".into(),
            id: id.to_string(),
        })?;

        Ok(Department {
            id,
            name: row.name,
            created_at: row.created_at,
        })
    }

    async fn list(&self) -> TeamgateResult<Vec<Department>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM department \
                 ORDER BY created_at ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<DepartmentRowWithId> = result.take(0).map_err(DbError::from)?;
        Ok(rows
            .into_iter()
            .map(|row| Department {
                id: row.record_id,
                name: row.name,
                created_at: row.created_at,
            })
            .collect())
    }

    async fn delete(&self, id: i64) -> TeamgateResult<()> {
        // Observe absence before cascading.
        self.get_by_id(id).await?;

        // Cascade: member accounts go with the department, and their
        // tokens with them.
        self.db
            .query(
                "DELETE api_token WHERE account_id IN \
                     (SELECT VALUE meta::id(id) FROM account \
                      WHERE department_id = $id); \
                 DELETE account WHERE department_id = $id; \
                 DELETE type::record('department', $id);",
            )
            .bind(("id", id))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
