//! Database models for the storage layer.

use chrono::{DateTime, Utc};
use notes_core::{Note, NoteId};
use sqlx::FromRow;

use crate::error::{StoreError, StoreResult};

/// Database row for the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct NoteRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_date: DateTime<Utc>,
}

/// Validate an id handed out by a backend on insert.
pub(crate) fn assigned_id(id: i64) -> StoreResult<NoteId> {
    NoteId::new(id).map_err(|_| StoreError::CorruptRow(format!("non-positive note id {id}")))
}

impl From<NoteRecord> for Note {
    fn from(row: NoteRecord) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
        }
    }
}
