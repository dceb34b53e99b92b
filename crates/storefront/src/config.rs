//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `UBERMELON_HOST` - Bind address (default: 127.0.0.1)
//! - `UBERMELON_PORT` - Listen port (default: 5000)
//! - `UBERMELON_BASE_URL` - Public URL; `https://` turns on secure cookies
//!   (default: <http://localhost:5000>)
//! - `UBERMELON_CUSTOMERS_FILE` - Customer list (default: customers.txt)
//! - `UBERMELON_MELONS_FILE` - Melon catalog (default: melons.txt)
//! - `UBERMELON_STATIC_DIR` - Static assets (default: crates/storefront/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "5000";
const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_CUSTOMERS_FILE: &str = "customers.txt";
const DEFAULT_MELONS_FILE: &str = "melons.txt";
const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Pipe-delimited customer list, read once at startup
    pub customers_file: PathBuf,
    /// Pipe-delimited melon catalog, read once at startup
    pub melons_file: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
            base_url: DEFAULT_BASE_URL.to_string(),
            customers_file: PathBuf::from(DEFAULT_CUSTOMERS_FILE),
            melons_file: PathBuf::from(DEFAULT_MELONS_FILE),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = get_or("UBERMELON_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("UBERMELON_HOST".to_string(), e.to_string()))?;
        let port = get_or("UBERMELON_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("UBERMELON_PORT".to_string(), e.to_string()))?;

        Ok(Self {
            host,
            port,
            base_url: get_or("UBERMELON_BASE_URL", DEFAULT_BASE_URL),
            customers_file: get_or("UBERMELON_CUSTOMERS_FILE", DEFAULT_CUSTOMERS_FILE).into(),
            melons_file: get_or("UBERMELON_MELONS_FILE", DEFAULT_MELONS_FILE).into(),
            static_dir: get_or("UBERMELON_STATIC_DIR", DEFAULT_STATIC_DIR).into(),
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}
