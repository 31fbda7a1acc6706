//! Integer path parameter extractor.
//!
//! Routes such as `/elements/period/{period}` take a numeric key. The raw path
//! segment is read as text and parsed here so that a malformed value becomes a
//! `400 Bad Request` with an `{"Error": ...}` body instead of axum's plain-text
//! rejection.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::text_param::single_path_param;
use crate::error::RestError;

/// Extractor for a route's single integer path parameter.
///
/// # Example
///
/// ```rust,ignore
/// use periodic_rest::extractors::IntegerParam;
///
/// async fn handler(IntegerParam(period): IntegerParam) {
///     // period is an i64
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerParam(pub i64);

impl IntegerParam {
    /// Parses `raw` as the value of the path parameter `name`.
    pub fn parse(name: &str, raw: &str) -> Result<Self, RestError> {
        raw.parse::<i64>()
            .map(IntegerParam)
            .map_err(|_| RestError::BadRequest {
                message: format!("Invalid {}: '{}' is not an integer", name, raw),
            })
    }
}

impl<S> FromRequestParts<S> for IntegerParam
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let (name, raw) = single_path_param(parts, state).await?;
        Self::parse(&name, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(IntegerParam::parse("period", "2").unwrap(), IntegerParam(2));
        assert_eq!(IntegerParam::parse("group", "-1").unwrap(), IntegerParam(-1));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for raw in ["abc", "1.5", "", " 1", "1e3"] {
            let err = IntegerParam::parse("period", raw).unwrap_err();
            assert!(matches!(err, RestError::BadRequest { ref message } if message.contains("period")));
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(IntegerParam::parse("atomic_number", "99999999999999999999").is_err());
    }
}
