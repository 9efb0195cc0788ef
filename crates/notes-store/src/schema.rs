//! Table definition and startup schema creation.
//!
//! The service owns a single table. Creation is idempotent and runs on every
//! connect unless disabled; there is no versioned migration history.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded SQL for the `notes` table (001_notes.sql).
pub const NOTES_TABLE: &str = include_str!("../../../migrations/001_notes.sql");

/// Create the `notes` table if it does not already exist.
///
/// # Errors
///
/// Returns [`StoreError::Schema`] if the statement fails.
pub async fn ensure_schema(pool: &PgPool) -> StoreResult<()> {
    tracing::debug!("Ensuring notes table exists (001_notes.sql)...");
    sqlx::raw_sql(NOTES_TABLE)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Schema(format!("Creating notes table failed: {}", e)))?;

    tracing::info!("Schema ready");
    Ok(())
}

/// Check whether the `notes` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = current_schema()
            AND table_name = 'notes'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_table_embedded() {
        assert!(NOTES_TABLE.contains("CREATE TABLE IF NOT EXISTS notes"));
        assert!(NOTES_TABLE.contains("id BIGSERIAL PRIMARY KEY"));
        assert!(NOTES_TABLE.contains("title VARCHAR(50)"));
        assert!(NOTES_TABLE.contains("description VARCHAR(50)"));
        assert!(NOTES_TABLE.contains("created_date TIMESTAMPTZ NOT NULL DEFAULT now()"));
    }
}
