//! The persistence seam between the HTTP layer and a backing store.

use async_trait::async_trait;
use notes_core::{NoteId, NoteInput};

use crate::error::StoreResult;
use crate::models::NoteRecord;

/// The five note operations, each against the single `notes` table.
///
/// None of them treat a missing row as an error. Existence is checked by the
/// caller with [`NoteGateway::read_one`] before `update` or `delete`, so the
/// check and the mutation are two separate round-trips with no lock between
/// them. Concurrent writers to the same id can race in that gap.
#[async_trait]
pub trait NoteGateway: Send + Sync {
    /// Insert a note, stamping `created_date` with the current time.
    async fn create(&self, note: &NoteInput) -> StoreResult<NoteId>;

    /// Fetch one note, or `None` if no row has this id.
    async fn read_one(&self, id: NoteId) -> StoreResult<Option<NoteRecord>>;

    /// Fetch every note, ordered by id.
    async fn read_all(&self) -> StoreResult<Vec<NoteRecord>>;

    /// Overwrite `title` and `description` of the row with this id.
    async fn update(&self, id: NoteId, note: &NoteInput) -> StoreResult<NoteId>;

    /// Remove the row with this id.
    async fn delete(&self, id: NoteId) -> StoreResult<()>;
}
