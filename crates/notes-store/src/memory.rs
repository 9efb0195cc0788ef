//! In-process note store.
//!
//! Same contract as the PostgreSQL [`Store`](crate::Store): ids start at 1
//! and are never reused, `read_all` is ordered by id, and missing rows are
//! not errors.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use notes_core::{NoteId, NoteInput};
use tokio::sync::Mutex;

use crate::error::StoreResult;
use crate::gateway::NoteGateway;
use crate::models::{NoteRecord, assigned_id};

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, NoteRecord>,
}

/// Note store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl NoteGateway for MemoryStore {
    async fn create(&self, note: &NoteInput) -> StoreResult<NoteId> {
        let mut table = self.table.lock().await;
        table.last_id += 1;
        let id = table.last_id;

        table.rows.insert(
            id,
            NoteRecord {
                id,
                title: note.title().to_string(),
                description: note.description().to_string(),
                created_date: Utc::now(),
            },
        );

        assigned_id(id)
    }

    async fn read_one(&self, id: NoteId) -> StoreResult<Option<NoteRecord>> {
        Ok(self.table.lock().await.rows.get(&id.get()).cloned())
    }

    async fn read_all(&self) -> StoreResult<Vec<NoteRecord>> {
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: NoteId, note: &NoteInput) -> StoreResult<NoteId> {
        if let Some(row) = self.table.lock().await.rows.get_mut(&id.get()) {
            row.title = note.title().to_string();
            row.description = note.description().to_string();
        }
        Ok(id)
    }

    async fn delete(&self, id: NoteId) -> StoreResult<()> {
        self.table.lock().await.rows.remove(&id.get());
        Ok(())
    }
}
