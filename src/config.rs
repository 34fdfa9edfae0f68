//! Configuration module for reading process settings from the environment.

use thiserror::Error;

/// Default port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;
/// Default bind address when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default database name when `DATABASE_NAME` is unset.
pub const DEFAULT_DATABASE_NAME: &str = "verdure";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Document store configuration.
    pub store: StoreConfig,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Document store configuration.
///
/// A missing connection URL is not an error: the process starts without a
/// store and the storage-backed endpoints report failures per request.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Connection string for the document store.
    pub url: Option<String>,
    /// Logical database name.
    pub database_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            database_name: DEFAULT_DATABASE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Reads `HOST`, `PORT`, `DATABASE_URL` and `DATABASE_NAME`, falling back
    /// to defaults where unset.
    ///
    /// # Errors
    /// Returns error if `PORT` is set but not a valid number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| {
                ConfigError::InvalidValue(format!("PORT must be a number, got {raw:?}"))
            })?,
            None => DEFAULT_PORT,
        };

        let url = lookup("DATABASE_URL").filter(|value| !value.is_empty());
        let database_name = lookup("DATABASE_NAME")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            store: StoreConfig { url, database_name },
        })
    }
}
