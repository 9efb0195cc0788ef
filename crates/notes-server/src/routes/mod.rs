//! Route definitions for the HTTP API.

pub mod notes;
pub mod ping;

use axum::Router;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(ping::routes())
        .merge(notes::routes())
        .fallback(not_found)
        .with_state(state)
}

/// Any unmatched path.
async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
