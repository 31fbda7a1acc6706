//! Health check endpoint handlers.
//!
//! Provides health and liveness endpoints for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use periodic_persistence::ElementStore;
use tracing::{debug, warn};

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Counts the stored elements to prove the store answers queries.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Store reachable, body includes the element count
/// - `503 Service Unavailable` - Store could not be queried
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: ElementStore + ?Sized,
{
    debug!("Processing health check request");

    let backend_name = state.store().backend_name();
    let timestamp = chrono::Utc::now().to_rfc3339();

    match state.store().count().await {
        Ok(count) => {
            let body = serde_json::json!({
                "status": "healthy",
                "backend": backend_name,
                "elements": count,
                "timestamp": timestamp
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            warn!(backend = backend_name, error = %e, "Health check failed");
            let body = serde_json::json!({
                "status": "unhealthy",
                "backend": backend_name,
                "Error": e.to_string(),
                "timestamp": timestamp
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}

/// Handler for a liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
