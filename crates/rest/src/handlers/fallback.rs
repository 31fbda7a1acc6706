//! Fallback for paths that match no route.

use axum::http::Uri;
use tracing::debug;

use crate::error::RestError;

/// Answers `404 {"Error": "Not found"}` for unknown paths.
pub async fn not_found_handler(uri: Uri) -> RestError {
    debug!(path = %uri.path(), "No route matched");
    RestError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
