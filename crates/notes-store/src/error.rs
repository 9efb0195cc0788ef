//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Table creation failed at startup.
    #[error("schema error: {0}")]
    Schema(String),

    /// Invalid store configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A row came back that violates the table's invariants.
    #[error("corrupt row: {0}")]
    CorruptRow(String),
}
