//! Validating extractors for note requests.
//!
//! Handlers take [`NoteIdPath`], [`NoteBody`] or [`NoteUpdate`] instead of
//! the raw axum extractors, so a handler body only runs once its inputs are
//! valid and every rejection is a 422 with field-level detail.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use notes_core::{FieldError, NoteId, NoteInput, ValidationErrors};

use crate::error::ApiError;

async fn path_id<S>(parts: &mut Parts, state: &S) -> Result<NoteId, ValidationErrors>
where
    S: Send + Sync,
{
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
        .await
        .map_err(|rejection| {
            ValidationErrors::single(FieldError::new(
                &["id"],
                rejection.body_text(),
                "value_error.path",
            ))
            .located("path")
        })?;

    NoteId::parse(&raw).map_err(|errors| errors.located("path"))
}

async fn body_input<S>(req: Request, state: &S) -> Result<NoteInput, ValidationErrors>
where
    S: Send + Sync,
{
    let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
        ValidationErrors::single(FieldError::new(
            &[],
            rejection.body_text(),
            "value_error.body",
        ))
        .located("body")
    })?;

    let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
        ValidationErrors::single(FieldError::new(
            &[],
            format!("Expecting value: {e}"),
            "value_error.jsondecode",
        ))
        .located("body")
    })?;

    NoteInput::from_json(&value).map_err(|errors| errors.located("body"))
}

/// A positive note id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct NoteIdPath(pub NoteId);

impl<S> FromRequestParts<S> for NoteIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(path_id(parts, state).await?))
    }
}

/// A validated note body (`title` and `description`).
///
/// The body is decoded as JSON whatever the `Content-Type` says.
#[derive(Debug, Clone)]
pub struct NoteBody(pub NoteInput);

impl<S> FromRequest<S> for NoteBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(body_input(req, state).await?))
    }
}

/// Path id and body of an update, validated together.
///
/// Both parts are always checked; when both fail the rejection lists the
/// path errors followed by the body errors.
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub id: NoteId,
    pub payload: NoteInput,
}

impl<S> FromRequest<S> for NoteUpdate
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let id = path_id(&mut parts, state).await;
        let payload = body_input(Request::from_parts(parts, body), state).await;

        match (id, payload) {
            (Ok(id), Ok(payload)) => Ok(Self { id, payload }),
            (Err(path), Err(body)) => Err(path.merge(body).into()),
            (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors.into()),
        }
    }
}
