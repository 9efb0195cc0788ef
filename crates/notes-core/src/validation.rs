//! Field-level validation errors and the checks that produce them.
//!
//! Errors are collected rather than short-circuited, so a body with two bad
//! fields reports both.

use serde::Serialize;
use serde_json::Value;

/// Minimum length (in characters) of `title` and `description`.
pub const MIN_TEXT_LEN: usize = 3;

/// Maximum length (in characters) of `title` and `description`.
pub const MAX_TEXT_LEN: usize = 50;

/// A single failed check, located by the path to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Path to the field, e.g. `["body", "title"]`.
    pub loc: Vec<String>,
    /// Human-readable message.
    pub msg: String,
    /// Machine-readable error kind.
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(&[field], "field required", "value_error.missing")
    }

    pub fn not_a_string(field: &str) -> Self {
        Self::new(&[field], "str type expected", "type_error.str")
    }

    pub fn too_short(field: &str, min: usize) -> Self {
        Self::new(
            &[field],
            format!("ensure this value has at least {min} characters"),
            "value_error.any_str.min_length",
        )
    }

    pub fn too_long(field: &str, max: usize) -> Self {
        Self::new(
            &[field],
            format!("ensure this value has at most {max} characters"),
            "value_error.any_str.max_length",
        )
    }
}

/// One or more validation failures.
///
/// Never empty: construct through [`ValidationErrors::single`] or the
/// validators in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", describe(.0))]
pub struct ValidationErrors(pub(crate) Vec<FieldError>);

impl ValidationErrors {
    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    /// Prefix every error location with `root` (`"body"`, `"path"`, ...).
    #[must_use]
    pub fn located(mut self, root: &str) -> Self {
        for error in &mut self.0 {
            error.loc.insert(0, root.to_string());
        }
        self
    }

    /// Append the errors of `other` after those of `self`.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check a bounded text field taken from a JSON object.
///
/// Numbers are accepted as their decimal text (`12345` becomes `"12345"`)
/// and then length-checked like any string. Booleans, arrays and objects
/// are rejected.
pub(crate) fn bounded_text(
    object: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<String, FieldError> {
    let text = match object.get(field) {
        None | Some(Value::Null) => return Err(FieldError::missing(field)),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return Err(FieldError::not_a_string(field)),
    };
    check_length(field, &text).map(|()| text)
}

/// Length check counted in characters, inclusive on both ends.
pub(crate) fn check_length(field: &str, value: &str) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len < MIN_TEXT_LEN {
        Err(FieldError::too_short(field, MIN_TEXT_LEN))
    } else if len > MAX_TEXT_LEN {
        Err(FieldError::too_long(field, MAX_TEXT_LEN))
    } else {
        Ok(())
    }
}
