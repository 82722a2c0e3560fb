//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so the binary runs with zero setup in development.

use std::env;
use std::path::PathBuf;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address for the HTTP listener.
    pub host: String,

    /// HTTP port.
    pub port: u16,

    /// Path to the SQLite database file. Created if missing.
    pub database_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable        | Default           |
    /// |-----------------|-------------------|
    /// | `HTTP_HOST`     | `0.0.0.0`         |
    /// | `HTTP_PORT`     | `5000`            |
    /// | `DATABASE_PATH` | `./penjualan.db`  |
    pub fn load() -> Result<Self, ConfigError> {
        let config = ServerConfig {
            host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./penjualan.db".to_string())
                .into(),
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Guard against env leakage from the host running the tests
        if env::var("HTTP_PORT").is_err() && env::var("HTTP_HOST").is_err() {
            let config = ServerConfig::load().unwrap();
            assert_eq!(config.port, 5000);
            assert_eq!(config.host, "0.0.0.0");
        }
    }
}
