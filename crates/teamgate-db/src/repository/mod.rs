//! SurrealDB repository implementations.

mod account;
mod department;
mod token;

pub use account::SurrealAccountRepository;
pub use department::SurrealDepartmentRepository;
pub use token::SurrealTokenRepository;

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct SequenceRow {
    value: i64,
}

/// Allocate the next integer id for `table` from its sequence row.
///
/// `UPSERT ... value += 1` is atomic per record, so concurrent
/// allocations never hand out the same id.
pub(crate) async fn next_id<C: Connection>(db: &Surreal<C>, table: &str) -> Result<i64, DbError> {
    let mut result = db
        .query("UPSERT type::record('sequence', $table) SET value += 1 RETURN value")
        .bind(("table", table.to_string()))
        .await?;

    let rows: Vec<SequenceRow> = result.take(0)?;
    rows.into_iter()
        .next()
        .map(|row| row.value)
        .ok_or_else(|| DbError::Migration(format!("sequence allocation failed for {table}")))
}
