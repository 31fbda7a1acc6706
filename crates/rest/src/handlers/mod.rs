//! HTTP request handlers for element lookups.
//!
//! - [`element`] - Single-element lookups by atomic number, symbol and name
//! - [`elements`] - Filtered element collections
//! - [`health`] - Health check and liveness endpoints
//! - [`fallback`] - Response for unknown paths

pub mod element;
pub mod elements;
pub mod fallback;
pub mod health;

// Re-export handlers for convenience
pub use element::{
    element_by_atomic_number_handler, element_by_name_handler, element_by_symbol_handler,
};
pub use elements::{
    all_elements_handler, elements_by_group_handler, elements_by_metal_handler,
    elements_by_metalloid_handler, elements_by_natural_handler, elements_by_nonmetal_handler,
    elements_by_period_handler, elements_by_phase_handler, elements_by_radioactive_handler,
    elements_by_type_handler,
};
pub use fallback::not_found_handler;
pub use health::{health_handler, liveness_handler};
