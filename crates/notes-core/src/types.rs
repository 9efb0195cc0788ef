//! Note shapes.
//!
//! [`NoteInput`] is what clients send when creating or replacing a note;
//! [`Note`] is what the service returns. Both carry `title` and
//! `description`, each 3 to 50 characters long.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::validation::{self, FieldError, ValidationErrors};

// ============================================================================
// ID Types
// ============================================================================

/// Identifier of a stored note. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Validate a raw identifier.
    pub fn new(id: i64) -> Result<Self, ValidationErrors> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(ValidationErrors::single(FieldError::new(
                &["id"],
                "ensure this value is greater than 0",
                "value_error.number.not_gt",
            )))
        }
    }

    /// Parse an identifier from its textual form (a path segment).
    pub fn parse(raw: &str) -> Result<Self, ValidationErrors> {
        let id = raw.trim().parse::<i64>().map_err(|_| {
            ValidationErrors::single(FieldError::new(
                &["id"],
                "value is not a valid integer",
                "type_error.integer",
            ))
        })?;
        Self::new(id)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Note Shapes
// ============================================================================

/// Validated title and description of a note.
///
/// Fields are private; the only ways in are [`NoteInput::new`] and
/// [`NoteInput::from_json`], both of which enforce the length bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInput {
    title: String,
    description: String,
}

impl NoteInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        let title = title.into();
        let description = description.into();

        match (
            validation::check_length("title", &title),
            validation::check_length("description", &description),
        ) {
            (Ok(()), Ok(())) => Ok(Self { title, description }),
            (title, description) => Err(ValidationErrors(
                [title.err(), description.err()].into_iter().flatten().collect(),
            )),
        }
    }

    /// Validate a decoded JSON body.
    ///
    /// The body must be an object with `title` and `description` fields,
    /// each a string or a number (taken as its text). Unknown fields are
    /// ignored. All failing fields are reported.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let Value::Object(object) = body else {
            return Err(ValidationErrors::single(FieldError::new(
                &[],
                "value is not a valid dict",
                "type_error.dict",
            )));
        };

        match (
            validation::bounded_text(object, "title"),
            validation::bounded_text(object, "description"),
        ) {
            (Ok(title), Ok(description)) => Ok(Self { title, description }),
            (title, description) => Err(ValidationErrors(
                [title.err(), description.err()].into_iter().flatten().collect(),
            )),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A stored note as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub description: String,
}

impl Note {
    /// Response for a create or update: the assigned id with the submitted fields.
    pub fn from_input(id: NoteId, input: &NoteInput) -> Self {
        Self {
            id: id.get(),
            title: input.title.clone(),
            description: input.description.clone(),
        }
    }
}
