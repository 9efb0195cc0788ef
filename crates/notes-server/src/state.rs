//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::NoteGateway;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Note persistence.
    notes: Arc<dyn NoteGateway>,
}

impl AppState {
    /// Create new application state around a gateway.
    pub fn new(notes: Arc<dyn NoteGateway>) -> Self {
        Self { notes }
    }

    /// Get a reference to the note gateway.
    pub fn notes(&self) -> &dyn NoteGateway {
        self.notes.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
