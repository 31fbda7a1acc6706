//! Element route configuration.
//!
//! Defines all routes for the periodic table API.

use axum::{Router, routing::get};
use periodic_persistence::ElementStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all element API routes.
///
/// # Routes
///
/// ## Single element
/// - `GET /element/atomic_number/{atomic_number}`
/// - `GET /element/symbol/{symbol}`
/// - `GET /element/name/{name}`
///
/// ## Collections
/// - `GET /elements`
/// - `GET /elements/period/{period}`
/// - `GET /elements/group/{group}`
/// - `GET /elements/type/{element_type}`
/// - `GET /elements/natural/{value}`
/// - `GET /elements/metal/{value}`
/// - `GET /elements/metalloid/{value}`
/// - `GET /elements/nonmetal/{value}`
/// - `GET /elements/radioactive/{value}`
/// - `GET /elements/phase/{phase}`
///
/// ## Operational
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
///
/// Any other path answers `404 {"Error": "Not found"}`.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: ElementStore + ?Sized + 'static,
{
    Router::new()
        // Operational routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        // Single element
        .route(
            "/element/atomic_number/{atomic_number}",
            get(handlers::element_by_atomic_number_handler::<S>),
        )
        .route(
            "/element/symbol/{symbol}",
            get(handlers::element_by_symbol_handler::<S>),
        )
        .route(
            "/element/name/{name}",
            get(handlers::element_by_name_handler::<S>),
        )
        // Collections
        .route("/elements", get(handlers::all_elements_handler::<S>))
        .route(
            "/elements/period/{period}",
            get(handlers::elements_by_period_handler::<S>),
        )
        .route(
            "/elements/group/{group}",
            get(handlers::elements_by_group_handler::<S>),
        )
        .route(
            "/elements/type/{element_type}",
            get(handlers::elements_by_type_handler::<S>),
        )
        .route(
            "/elements/natural/{value}",
            get(handlers::elements_by_natural_handler::<S>),
        )
        .route(
            "/elements/metal/{value}",
            get(handlers::elements_by_metal_handler::<S>),
        )
        .route(
            "/elements/metalloid/{value}",
            get(handlers::elements_by_metalloid_handler::<S>),
        )
        .route(
            "/elements/nonmetal/{value}",
            get(handlers::elements_by_nonmetal_handler::<S>),
        )
        .route(
            "/elements/radioactive/{value}",
            get(handlers::elements_by_radioactive_handler::<S>),
        )
        .route(
            "/elements/phase/{phase}",
            get(handlers::elements_by_phase_handler::<S>),
        )
        .fallback(handlers::not_found_handler)
        // State
        .with_state(state)
}
