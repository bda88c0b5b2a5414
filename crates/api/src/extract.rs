//! Request extraction: untyped field-map bodies and integer id path segments.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use meetup_core::conference::FieldMap;
use meetup_core::types::DbId;
use serde_json::Value;

use crate::error::AppError;

/// A JSON object request body, kept untyped so field validation can tell
/// an absent key from an explicit `null`.
///
/// Unparseable bodies and non-object JSON are rejected as
/// [`AppError::BadRequest`], so clients always get a JSON error.
#[derive(Debug)]
pub struct FieldMapBody(pub FieldMap);

impl<S> FromRequest<S> for FieldMapBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        match value {
            Value::Object(fields) => Ok(FieldMapBody(fields)),
            other => Err(AppError::BadRequest(format!(
                "Request body must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

/// The `{id}` path segment as a [`DbId`].
///
/// A segment that is not an integer in `i64` range cannot name a row, so it
/// is answered as [`AppError::NotFound`] with a JSON body instead of axum's
/// plain-text path rejection.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        raw.parse::<DbId>()
            .map(IdPath)
            .map_err(|_| AppError::NotFound(format!("No resource with id '{raw}'")))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
