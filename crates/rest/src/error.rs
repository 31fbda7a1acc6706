//! Error types for the periodic table REST API.
//!
//! Every error is rendered as a JSON object with a single `"Error"` key.
//!
//! # Error Mapping
//!
//! | Storage Error | HTTP Status | Body |
//! |--------------|-------------|------|
//! | Lookup NotFound | 404 | `{"Error": "Element not found"}` |
//! | Unavailable / ConnectionFailed / PoolExhausted | 503 | `{"Error": "Service unavailable"}` |
//! | Other backend and seed errors | 500 | `{"Error": "Internal server error"}` |
//!
//! Backend detail for 500 and 503 goes to the log only.
//!
//! Path parameters that fail to parse as integers are rejected with 400 before
//! any lookup runs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use periodic_persistence::error::{LookupError, StorageError};
use std::fmt;

/// Body text for every single-element lookup miss.
pub const ELEMENT_NOT_FOUND: &str = "Element not found";

/// Body text for 503 responses.
pub const SERVICE_UNAVAILABLE: &str = "Service unavailable";

/// Body text for 500 responses.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// No element matched a keyed lookup (HTTP 404).
    NotFound {
        /// The dataset column that was searched.
        field: String,
        /// The requested value.
        value: String,
    },

    /// No route matched the request path (HTTP 404).
    RouteNotFound {
        /// The request path.
        path: String,
    },

    /// Bad request, such as a non-numeric value for a numeric parameter (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// The element store could not be reached (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { field, value } => {
                write!(f, "Element not found: {} = {}", field, value)
            }
            RestError::RouteNotFound { path } => write!(f, "No route for {}", path),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } | RestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            RestError::NotFound { .. } => ELEMENT_NOT_FOUND.to_string(),
            RestError::RouteNotFound { .. } => "Not found".to_string(),
            RestError::BadRequest { message } => message,
            RestError::ServiceUnavailable { message } => {
                tracing::warn!(%message, "Element store unavailable");
                SERVICE_UNAVAILABLE.to_string()
            }
            RestError::InternalError { message } => {
                tracing::error!(%message, "Request failed");
                INTERNAL_ERROR.to_string()
            }
        };

        (status, Json(error_body(&message))).into_response()
    }
}

/// Creates the `{"Error": message}` body shared by every error response.
pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "Error": message })
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        if err.is_unavailable() {
            return RestError::ServiceUnavailable {
                message: err.to_string(),
            };
        }

        match err {
            StorageError::Lookup(LookupError::NotFound { field, value }) => {
                RestError::NotFound { field, value }
            }
            StorageError::Backend(e) => RestError::InternalError {
                message: e.to_string(),
            },
            StorageError::Seed(e) => RestError::InternalError {
                message: e.to_string(),
            },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
