//! notes-store: persistence gateway for the notes service
//!
//! This crate provides:
//! - The [`NoteGateway`] trait: the five note operations the HTTP layer needs
//! - [`Store`], the PostgreSQL implementation backed by a sqlx pool
//! - [`MemoryStore`], an in-process implementation with the same contract
//! - Idempotent creation of the `notes` table at startup
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{NoteGateway, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let id = store.create(&input).await?;
//! let note = store.read_one(id).await?;
//!
//! store.close().await;
//! ```
//!
//! Missing rows are never errors: `read_one` returns `None`, and `update` /
//! `delete` on a missing id are no-ops. Callers that need a 404 check
//! existence first.

pub mod error;
pub mod gateway;
pub mod memory;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use gateway::NoteGateway;
pub use memory::MemoryStore;
pub use models::NoteRecord;
pub use store::{Store, StoreConfig};

// Re-export dependent crates
pub use notes_core;
pub use sqlx;
