//! Error types for the persistence layer.
//!
//! This module defines all error types used throughout the persistence layer,
//! separating lookup misses from backend faults and seed import failures.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Single-record lookup errors
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Seed import errors
    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Errors raised by keyed lookups that expect exactly one element.
#[derive(Error, Debug)]
pub enum LookupError {
    /// No element matched the key.
    #[error("element not found: {field} = {value}")]
    NotFound { field: String, value: String },
}

/// Errors raised by a storage backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Connection pool exhausted.
    #[error("connection pool exhausted for {backend_name}")]
    PoolExhausted { backend_name: String },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryFailed { message: String },

    /// Schema creation or migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Errors raised while importing a seed dataset.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a JSON array of element records.
    #[error("invalid seed data in {}: {message}", .path.display())]
    InvalidFormat { path: PathBuf, message: String },

    /// Two records in the seed share an atomic number.
    #[error("duplicate atomic number {atomic_number} in seed data")]
    DuplicateAtomicNumber { atomic_number: i64 },
}

impl StorageError {
    /// Returns true if this error means the store could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StorageError::Backend(
                BackendError::Unavailable { .. }
                    | BackendError::ConnectionFailed { .. }
                    | BackendError::PoolExhausted { .. }
            )
        )
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(_err: r2d2::Error) -> Self {
        StorageError::Backend(BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        })
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "runtime".to_string(),
            message: format!("blocking query task failed: {}", err),
            source: Some(Box::new(err)),
        })
    }
}
