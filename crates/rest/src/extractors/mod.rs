//! Axum extractors for element routes.
//!
//! - [`IntegerParam`] - Parse a single integer path parameter, rejecting
//!   non-numeric input with a 400 response
//! - [`TextParam`] - Decode a single text path parameter, rejecting
//!   undecodable input with a 400 response

mod integer_param;
mod text_param;

pub use integer_param::IntegerParam;
pub use text_param::TextParam;
