//! notes-server: HTTP API server for the notes service
//!
//! This crate provides:
//! - REST endpoints to create, read, update and delete notes
//! - Request validation that rejects bad bodies and ids before any store access
//! - JSON error responses (`{"detail": ...}`)
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation and propagation
//!
//! Handlers reach storage only through the [`NoteGateway`] held in
//! [`AppState`], so the same router runs against PostgreSQL or the
//! in-memory store.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use notes_server::{build_app, AppState, ServerConfig};
//! use notes_store::MemoryStore;
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(Arc::new(MemoryStore::new()));
//! let app = build_app(state, &config)?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, body::Body};
use tower_http::trace::TraceLayer;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig, StorageBackend};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
pub use notes_store::NoteGateway;

/// Build the full application: routes plus the middleware stack.
///
/// Layers run outermost first: CORS, request id assignment, request id
/// propagation, then request tracing (whose span carries the id).
pub fn build_app(state: AppState, config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = config.cors_layer()?;

    Ok(routes::build_router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::request_id::make_request_span::<Body>),
        )
        .layer(axum::middleware::from_fn(middleware::request_id::propagate_request_id))
        .layer(middleware::request_id::request_id_layer())
        .layer(cors))
}
