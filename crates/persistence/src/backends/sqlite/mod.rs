//! SQLite backend implementation.
//!
//! Stores the element dataset in a single `elements` table. Supports both
//! in-memory databases (great for testing) and file-based databases.
//!
//! # Example
//!
//! ```no_run
//! use periodic_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::open("elements.db")?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE elements (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,  -- storage row id, never serialized
//!     "AtomicNumber" INTEGER NOT NULL UNIQUE,
//!     "Element" TEXT NOT NULL,
//!     "Symbol" TEXT NOT NULL,
//!     "AtomicMass" REAL,
//!     -- ... one column per remaining element field, all nullable
//!     "NumberofValence" INTEGER
//! );
//! ```
//!
//! Queries run on tokio's blocking thread pool and return rows ordered by
//! row id, which is insertion order.

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use schema::SCHEMA_VERSION;
