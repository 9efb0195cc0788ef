//! notes-core: shared types for the notes service
//!
//! This crate provides:
//! - The validated input shape of a note ([`NoteInput`])
//! - The stored/response shape of a note ([`Note`])
//! - Positive note identifiers ([`NoteId`])
//! - Structured, field-level validation errors ([`ValidationErrors`])
//!
//! Every constructor here validates, so a value of one of these types is
//! always within bounds once it exists.

pub mod types;
pub mod validation;

pub use types::{Note, NoteId, NoteInput};
pub use validation::{FieldError, ValidationErrors, MAX_TEXT_LEN, MIN_TEXT_LEN};
