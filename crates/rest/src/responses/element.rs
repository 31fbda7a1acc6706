//! Element record serialization.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use periodic_persistence::Element;

/// Renders a single element as a `200 OK` JSON object.
pub fn element_response(element: Element) -> Response {
    (StatusCode::OK, Json(element)).into_response()
}

/// Renders a list of elements as a `200 OK` JSON array.
///
/// An empty list is a valid answer and is rendered as `[]`.
pub fn element_collection_response(elements: Vec<Element>) -> Response {
    (StatusCode::OK, Json(elements)).into_response()
}
