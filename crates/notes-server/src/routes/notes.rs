//! Note CRUD routes.
//!
//! - POST /notes/ - Create a note
//! - GET /notes/ - List all notes
//! - GET /notes/{id}/ - Read one note
//! - PUT /notes/{id}/ - Replace a note's title and description
//! - DELETE /notes/{id}/ - Delete a note
//!
//! Each path is also served without the trailing slash.
//!
//! Update and delete look the note up first and answer 404 if it is
//! missing; the lookup and the write are separate store calls.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use notes_core::{Note, NoteId};
use notes_store::{NoteGateway, NoteRecord};

use crate::error::{ApiError, ApiResult};
use crate::extract::{NoteBody, NoteIdPath, NoteUpdate};
use crate::state::AppState;

/// Detail returned with every 404 for a note id.
pub const NOTE_NOT_FOUND: &str = "Note not found";

/// Existence check shared by read, update and delete.
async fn existing_note(notes: &dyn NoteGateway, id: NoteId) -> ApiResult<NoteRecord> {
    notes
        .read_one(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(NOTE_NOT_FOUND.to_string()))
}

/// POST /notes/ - Create a note.
///
/// # Response
///
/// - 201 Created: `{ "id", "title", "description" }` echoing the request
/// - 422 Unprocessable Entity: invalid body
async fn create_note(
    State(state): State<AppState>,
    NoteBody(payload): NoteBody,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let id = state.notes().create(&payload).await?;
    tracing::info!(note_id = %id, "Note created");

    Ok((StatusCode::CREATED, Json(Note::from_input(id, &payload))))
}

/// GET /notes/{id}/ - Read one note.
async fn read_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
) -> ApiResult<Json<Note>> {
    let note = existing_note(state.notes(), id).await?;
    tracing::debug!(note_id = %id, "Note read");

    Ok(Json(note.into()))
}

/// GET /notes/ - List every note.
async fn read_all_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<Note>>> {
    let notes: Vec<Note> = state
        .notes()
        .read_all()
        .await?
        .into_iter()
        .map(Note::from)
        .collect();
    tracing::debug!(count = notes.len(), "Notes listed");

    Ok(Json(notes))
}

/// PUT /notes/{id}/ - Replace title and description.
///
/// # Response
///
/// - 200 OK: `{ "id", "title", "description" }` echoing the request
/// - 404 Not Found: no note with this id
/// - 422 Unprocessable Entity: invalid id or body
async fn update_note(
    State(state): State<AppState>,
    NoteUpdate { id, payload }: NoteUpdate,
) -> ApiResult<Json<Note>> {
    existing_note(state.notes(), id).await?;

    let updated = state.notes().update(id, &payload).await?;
    tracing::info!(note_id = %updated, "Note updated");

    Ok(Json(Note::from_input(updated, &payload)))
}

/// DELETE /notes/{id}/ - Delete a note.
///
/// # Response
///
/// - 200 OK: the note as it was stored before deletion
/// - 404 Not Found: no note with this id
/// - 422 Unprocessable Entity: invalid id
async fn delete_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
) -> ApiResult<Json<Note>> {
    let note = existing_note(state.notes(), id).await?;

    state.notes().delete(id).await?;
    tracing::info!(note_id = %id, "Note deleted");

    Ok(Json(note.into()))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes/", get(read_all_notes).post(create_note))
        .route("/notes", get(read_all_notes).post(create_note))
        .route(
            "/notes/{id}/",
            get(read_note).put(update_note).delete(delete_note),
        )
        .route(
            "/notes/{id}",
            get(read_note).put(update_note).delete(delete_note),
        )
}
