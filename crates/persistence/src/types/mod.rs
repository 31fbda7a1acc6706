//! Core types for the persistence layer.
//!
//! - [`Element`] - One row of the element dataset
//! - [`NumericField`], [`TextField`] - Columns that can be filtered on
//!
//! # Example
//!
//! ```
//! use periodic_persistence::types::{Element, TextField};
//!
//! let helium = Element {
//!     period: Some(1),
//!     group: Some(18),
//!     ..Element::new(2, "Helium", "He")
//! };
//!
//! assert_eq!(helium.text(TextField::Symbol), Some("He"));
//! assert_eq!(helium.to_string(), "He - Helium");
//! ```

mod element;

pub use element::{Element, NumericField, TextField};
