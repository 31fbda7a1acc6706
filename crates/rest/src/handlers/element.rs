//! Single-element lookup handlers.
//!
//! Each handler resolves exactly one element or answers
//! `404 {"Error": "Element not found"}`.

use axum::{
    extract::State,
    response::Response,
};
use periodic_persistence::ElementStore;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{IntegerParam, TextParam};
use crate::responses::element_response;
use crate::state::AppState;

/// Handler for lookup by atomic number.
///
/// # HTTP Request
///
/// `GET [base]/element/atomic_number/{atomic_number}`
///
/// # Response
///
/// - `200 OK` - The element
/// - `400 Bad Request` - The atomic number is not an integer
/// - `404 Not Found` - No element has this atomic number
pub async fn element_by_atomic_number_handler<S>(
    State(state): State<AppState<S>>,
    IntegerParam(atomic_number): IntegerParam,
) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!(atomic_number, "Processing element lookup by atomic number");

    let element = state.elements().by_atomic_number(atomic_number).await?;
    Ok(element_response(element))
}

/// Handler for lookup by symbol, ignoring case.
///
/// # HTTP Request
///
/// `GET [base]/element/symbol/{symbol}`
///
/// # Example
///
/// ```http
/// GET /element/symbol/he HTTP/1.1
/// ```
pub async fn element_by_symbol_handler<S>(
    State(state): State<AppState<S>>,
    TextParam(symbol): TextParam,
) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!(symbol = %symbol, "Processing element lookup by symbol");

    let element = state.elements().by_symbol(&symbol).await?;
    Ok(element_response(element))
}

/// Handler for lookup by element name, ignoring case.
///
/// # HTTP Request
///
/// `GET [base]/element/name/{name}`
pub async fn element_by_name_handler<S>(
    State(state): State<AppState<S>>,
    TextParam(name): TextParam,
) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!(name = %name, "Processing element lookup by name");

    let element = state.elements().by_name(&name).await?;
    Ok(element_response(element))
}
