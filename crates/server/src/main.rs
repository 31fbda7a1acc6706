//! Periodic table element lookup API.
//!
//! Serves the element dataset from SQLite or from an in-memory store filled
//! from a JSON seed file.

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use periodic_persistence::DynElementStore;
use periodic_persistence::backends::MemoryBackend;
use periodic_persistence::seed::load_seed_file;
use periodic_rest::{ServerConfig, StorageBackendMode, create_app_with_config, init_logging};
use tracing::{info, warn};

#[cfg(feature = "sqlite")]
use periodic_persistence::backends::sqlite::SqliteBackend;

/// Opens the SQLite database, applies the schema and imports the seed file if one is configured.
#[cfg(feature = "sqlite")]
async fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    use periodic_persistence::ElementStore;
    use periodic_persistence::seed::seed_from_file;

    let db_path = config.database_path();
    info!(database = %db_path, "Initializing SQLite backend");

    let backend = SqliteBackend::open(db_path)?;
    backend.init_schema()?;

    if let Some(seed_file) = &config.seed_file {
        let written = seed_from_file(&backend, seed_file).await?;
        info!(seed_file = %seed_file.display(), count = written, "Seeded SQLite backend");
    }

    let count = backend.count().await?;
    if count == 0 {
        warn!(database = %db_path, "Element table is empty; every lookup will miss");
    } else {
        info!(count, "Element dataset ready");
    }

    Ok(backend)
}

/// Fallback when sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn create_sqlite_backend(_config: &ServerConfig) -> anyhow::Result<MemoryBackend> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p periodic-server --features sqlite"
    )
}

/// Builds the in-memory backend from the seed file.
fn create_memory_backend(seed_file: &Path) -> anyhow::Result<MemoryBackend> {
    info!(seed_file = %seed_file.display(), "Initializing memory backend");
    let elements = load_seed_file(seed_file)?;
    Ok(MemoryBackend::new(elements)?)
}

/// Resolves when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server");
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(config.effective_log_level());

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_mode = config
        .storage_backend_mode()
        .map_err(|e| anyhow::anyhow!("Invalid storage backend configuration: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        environment = %config.environment,
        storage_backend = %backend_mode,
        "Starting periodic table API"
    );

    let store: DynElementStore = match backend_mode {
        StorageBackendMode::Sqlite => {
            Arc::new(create_sqlite_backend(&config).await?) as DynElementStore
        }
        StorageBackendMode::Memory => {
            let seed_file = config
                .seed_file
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("The memory backend requires a seed file"))?;
            Arc::new(create_memory_backend(seed_file)?) as DynElementStore
        }
    };

    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await
}
