//! # periodic-rest - Periodic Table HTTP API
//!
//! This crate exposes the element dataset over read-only HTTP endpoints. Each
//! route binds one path pattern to one query service operation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use periodic_rest::{create_app, ServerConfig};
//! use periodic_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("elements.db")?;
//!     backend.init_schema()?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Lookup | URL Pattern | Miss |
//! |--------|-------------|------|
//! | by atomic number | `/element/atomic_number/{n}` | 404 |
//! | by symbol | `/element/symbol/{s}` | 404 |
//! | by name | `/element/name/{name}` | 404 |
//! | all | `/elements` | `[]` |
//! | by period | `/elements/period/{p}` | `[]` |
//! | by group | `/elements/group/{g}` | `[]` |
//! | by type | `/elements/type/{t}` | `[]` |
//! | by flag | `/elements/{natural,metal,metalloid,nonmetal,radioactive}/{v}` | `[]` |
//! | by phase | `/elements/phase/{phase}` | `[]` |
//!
//! Text comparisons ignore case. Numeric parameters that are not integers are
//! rejected with `400 Bad Request`.
//!
//! ## Error Handling
//!
//! All errors are JSON objects with a single `"Error"` key. Single-element
//! misses always answer `{"Error": "Element not found"}`.
//!
//! ## Architecture
//!
//! - [`error`] - Error types and status mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (query service, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Path parameter parsing
//! - [`responses`] - Element serialization
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use periodic_persistence::ElementStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: ElementStore + 'static,
{
    create_app_with_config(Arc::new(storage), ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// The store may be unsized, so a backend picked at runtime can be passed as
/// `Arc<dyn ElementStore>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use periodic_rest::{create_app_with_config, ServerConfig};
/// use periodic_persistence::backends::MemoryBackend;
///
/// let backend = MemoryBackend::new(elements)?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(Arc::new(backend), config);
/// ```
pub fn create_app_with_config<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: ElementStore + ?Sized + 'static,
{
    info!(
        "Creating periodic table API with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(storage, config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
///
/// The API is read-only, so only `GET` is allowed.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "periodic_rest={level},periodic_persistence={level},periodic_api={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
