//! Response formatting for element lookups.
//!
//! Element records are rendered as JSON objects whose keys follow the dataset
//! column names in their declared order; collections are JSON arrays in
//! storage order.

pub mod element;

pub use element::{element_collection_response, element_response};
