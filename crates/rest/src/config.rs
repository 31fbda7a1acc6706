//! Server configuration for the periodic table API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PERIODIC_SERVER_PORT` | 5000 | Server port |
//! | `PERIODIC_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `PERIODIC_LOG_LEVEL` | | Log level; overrides the `ENVIRONMENT` default |
//! | `PERIODIC_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `PERIODIC_ENABLE_CORS` | true | Enable CORS |
//! | `PERIODIC_CORS_ORIGINS` | * | Allowed origins |
//! | `DATABASE_URI` | elements.db | SQLite path, `:memory:`, or a `sqlite:///` URL |
//! | `PERIODIC_STORAGE_BACKEND` | sqlite | `sqlite` or `memory` |
//! | `PERIODIC_SEED_FILE` | | JSON seed loaded at startup |
//! | `ENVIRONMENT` | development | Default log level: `info` in `production`, else `debug` |
//!
//! # Example
//!
//! ```rust
//! use periodic_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 8000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:8000");
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

/// Which element store the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackendMode {
    /// SQLite database at `database_url`.
    Sqlite,
    /// In-process store filled from the seed file.
    Memory,
}

impl fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackendMode::Sqlite => write!(f, "sqlite"),
            StorageBackendMode::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageBackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackendMode::Sqlite),
            "memory" => Ok(StorageBackendMode::Memory),
            other => Err(format!(
                "Unknown storage backend '{}' (expected sqlite or memory)",
                other
            )),
        }
    }
}

/// Server configuration for the periodic table API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "periodic-api")]
#[command(about = "Periodic table element lookup API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "PERIODIC_SERVER_PORT", default_value = "5000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "PERIODIC_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace). When unset, the level
    /// follows `--environment`.
    #[arg(long, env = "PERIODIC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "PERIODIC_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "PERIODIC_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "PERIODIC_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// SQLite database path, `:memory:`, or a `sqlite:///path` URL.
    #[arg(long, env = "DATABASE_URI", default_value = "elements.db")]
    pub database_url: String,

    /// Element store to serve from (sqlite or memory).
    #[arg(long, env = "PERIODIC_STORAGE_BACKEND", default_value = "sqlite")]
    pub storage_backend: String,

    /// JSON seed file imported into the store at startup.
    #[arg(long, env = "PERIODIC_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Deployment environment. Outside `production` the default log level is `debug`.
    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "127.0.0.1".to_string(),
            log_level: None,
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            database_url: "elements.db".to_string(),
            storage_backend: "sqlite".to_string(),
            seed_file: None,
            environment: "development".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse_from(["periodic-api"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured storage backend.
    pub fn storage_backend_mode(&self) -> Result<StorageBackendMode, String> {
        self.storage_backend.parse()
    }

    /// Returns true when running in the production environment.
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// Returns the log level to install.
    ///
    /// An explicit `log_level` always wins. Otherwise production logs at
    /// `info` and every other environment at `debug`.
    pub fn effective_log_level(&self) -> &str {
        match &self.log_level {
            Some(level) => level,
            None if self.is_production() => "info",
            None => "debug",
        }
    }

    /// Returns the SQLite path named by `database_url`.
    ///
    /// Accepts a plain path as well as the SQLAlchemy form `sqlite:///elements.db`
    /// (relative) or `sqlite:////var/data/elements.db` (absolute). `sqlite://`
    /// with no path means an in-memory database.
    pub fn database_path(&self) -> &str {
        let url = self.database_url.trim();
        match url.strip_prefix("sqlite:///") {
            Some(path) if !path.is_empty() => path,
            Some(_) => ":memory:",
            None if url == "sqlite://" => ":memory:",
            None => url,
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        match self.storage_backend_mode() {
            Ok(StorageBackendMode::Memory) if self.seed_file.is_none() => {
                errors.push("The memory backend requires a seed file".to_string());
            }
            Ok(_) => {}
            Err(e) => errors.push(e),
        }

        if self.database_url.trim().is_empty() {
            errors.push("Database URI cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and an in-memory database.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: Some("debug".to_string()),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            database_url: ":memory:".to_string(),
            storage_backend: "sqlite".to_string(),
            seed_file: None,
            environment: "test".to_string(),
        }
    }
}
