//! Core storage traits and abstractions.
//!
//! - [`ElementStore`] - Read-only equality filters over the element dataset
//! - [`ElementLoader`] - Bulk import used to seed a backend before serving
//!
//! Backends implement [`ElementStore`]; the query service and the REST layer
//! only ever see that trait, so any backend (including the in-memory one used
//! by tests) can be injected.

mod store;

pub use store::{DynElementStore, ElementLoader, ElementStore};
