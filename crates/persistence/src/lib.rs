//! Periodic Table Persistence Layer
//!
//! This crate stores the chemical element dataset and answers the equality
//! filters the periodic table API is built on.
//!
//! # Features
//!
//! - **Typed records**: [`Element`] is a static struct with the 28 dataset
//!   fields, serialized under the dataset's own column names
//! - **Pluggable stores**: anything implementing [`ElementStore`] can back the
//!   query service; SQLite and in-memory backends ship with the crate
//! - **Query service**: [`ElementQueryService`] names every lookup the API
//!   exposes and separates "not found" from "no matches"
//! - **Seeding**: JSON seed files can be imported at startup
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use periodic_persistence::backends::MemoryBackend;
//! use periodic_persistence::{Element, ElementQueryService};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = MemoryBackend::new(vec![
//!     Element { period: Some(1), group: Some(1), ..Element::new(1, "Hydrogen", "H") },
//!     Element { period: Some(1), group: Some(18), ..Element::new(2, "Helium", "He") },
//! ])?;
//! let service = ElementQueryService::new(Arc::new(backend));
//!
//! assert_eq!(service.by_symbol("he").await?.atomic_number, 2);
//! assert_eq!(service.by_period(1).await?.len(), 2);
//! assert!(service.by_group(999).await?.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod query;
pub mod seed;
pub mod types;

// Re-export commonly used types at crate root
pub use crate::core::{DynElementStore, ElementLoader, ElementStore};
pub use error::{StorageError, StorageResult};
pub use query::ElementQueryService;
pub use types::{Element, NumericField, TextField};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
