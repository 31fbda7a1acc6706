//! Common test utilities for REST API testing.
//!
//! - [`fixtures`] - Element datasets and test servers over each backend

pub mod fixtures;
