//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `API_HOST` - Bind address (default: 127.0.0.1)
//! - `API_PORT` - Listen port (default: 8000)
//! - `MONGODB_URL` - MongoDB connection string (default: mongodb://127.0.0.1:27017)
//! - `MONGODB_DATABASE` - Database name (default: cc-ecommerce-db)
//! - `CATALOG_PAGINATE_FILTERED` - Apply offset/limit to price-filtered
//!   listings too (default: false; see [`CatalogConfig`])
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry tracing sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// MongoDB connection string (may contain credentials)
    pub mongodb_url: SecretString,
    /// Name of the database holding the `products` and `orders` collections
    pub database: String,
    /// Catalog listing behavior
    pub catalog: CatalogConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry tracing sample rate
    pub sentry_traces_sample_rate: f32,
}

/// Catalog listing behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogConfig {
    /// When a price filter is active, the listing historically returns every
    /// matching record and ignores `offset`/`limit`. Setting this to `true`
    /// applies offset/limit to filtered listings as well.
    pub paginate_filtered: bool,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable has a default, so loading only fails on malformed values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env_or("API_HOST", "127.0.0.1")?;
        let port = parse_env_or("API_PORT", "8000")?;
        let mongodb_url = SecretString::from(get_env_or_default(
            "MONGODB_URL",
            "mongodb://127.0.0.1:27017",
        ));
        let database = get_env_or_default("MONGODB_DATABASE", "cc-ecommerce-db");
        let catalog = CatalogConfig {
            paginate_filtered: parse_bool_env("CATALOG_PAGINATE_FILTERED", false)?,
        };
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = parse_env_or("SENTRY_SAMPLE_RATE", "1.0")?;
        let sentry_traces_sample_rate = parse_env_or("SENTRY_TRACES_SAMPLE_RATE", "0.0")?;

        Ok(Self {
            host,
            port,
            mongodb_url,
            database,
            catalog,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable with a default, parsed into `T`.
fn parse_env_or<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Get a boolean environment variable. Accepts `true`/`false`/`1`/`0`.
fn parse_bool_env(key: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(value) => parse_bool(&value)
            .ok_or_else(|| ConfigError::InvalidEnvVar(key.to_string(), format!("not a boolean: {value}"))),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
