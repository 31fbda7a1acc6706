//! Text path parameter extractor.
//!
//! Wraps axum's `Path` so that a segment that cannot be decoded, such as
//! `%FF`, is rejected with the same `{"Error": ...}` body as every other error.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::RestError;

/// Extractor for a route's single text path parameter.
///
/// The value is passed through as decoded, without trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextParam(pub String);

impl<S> FromRequestParts<S> for TextParam
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let (_, raw) = single_path_param(parts, state).await?;
        Ok(TextParam(raw))
    }
}

/// Reads the one path parameter of the matched route as `(name, value)`.
pub(crate) async fn single_path_param<S>(
    parts: &mut Parts,
    state: &S,
) -> Result<(String, String), RestError>
where
    S: Send + Sync,
{
    let Path(mut params) = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
        .await
        .map_err(|e| RestError::BadRequest {
            message: e.body_text(),
        })?;

    match params.len() {
        1 => Ok(params.remove(0)),
        n => Err(RestError::InternalError {
            message: format!("Expected one path parameter, found {}", n),
        }),
    }
}
