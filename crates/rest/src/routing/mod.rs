//! Route configuration for the periodic table API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod element_routes;

pub use element_routes::create_routes;
