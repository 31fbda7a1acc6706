//! Application state for the periodic table API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the element query service and the server configuration.

use std::sync::Arc;

use periodic_persistence::{ElementQueryService, ElementStore};

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The element store type (must implement [`ElementStore`]). May be
///   `dyn ElementStore` when the backend is chosen at runtime.
///
/// # Example
///
/// ```rust,ignore
/// use periodic_rest::{AppState, ServerConfig};
/// use periodic_persistence::backends::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// let state = AppState::new(Arc::new(backend), ServerConfig::default());
/// ```
pub struct AppState<S: ?Sized> {
    /// Query operations over the element store.
    elements: ElementQueryService<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S: ?Sized> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: ElementStore + ?Sized> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            elements: ElementQueryService::new(store),
            config: Arc::new(config),
        }
    }

    /// Returns the element query service.
    pub fn elements(&self) -> &ElementQueryService<S> {
        &self.elements
    }

    /// Returns a reference to the element store.
    pub fn store(&self) -> &S {
        self.elements.store()
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
