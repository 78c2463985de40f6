//! # Configuration Settings
//!
//! Defines the configuration structure for the Portico backend. Values are
//! read from `PORTICO_*` environment variables with sensible local-dev
//! defaults, then validated before the server starts.

use crate::errors::{PorticoError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct AppConfig {
    /// Server configuration
    #[validate(nested)]
    pub server: ServerConfig,

    /// Database configuration
    #[validate(nested)]
    pub database: DatabaseConfig,

    /// Observability configuration
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = AppConfig::default();

        if let Ok(host) = std::env::var("PORTICO_SERVER_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PORTICO_SERVER_PORT") {
            config.server.port = port.parse().map_err(|_| {
                PorticoError::config(format!("Invalid PORTICO_SERVER_PORT: {}", port))
            })?;
        }
        if let Ok(url) = std::env::var("PORTICO_DATABASE_URL") {
            config.database.url = url;
        }
        if let Ok(max) = std::env::var("PORTICO_DATABASE_MAX_CONNECTIONS") {
            config.database.max_connections = max.parse().map_err(|_| {
                PorticoError::config(format!("Invalid PORTICO_DATABASE_MAX_CONNECTIONS: {}", max))
            })?;
        }
        if let Ok(auto) = std::env::var("PORTICO_DATABASE_AUTO_MIGRATE") {
            config.database.auto_migrate = matches!(auto.as_str(), "1" | "true" | "yes");
        }
        if let Ok(level) = std::env::var("PORTICO_LOG_LEVEL") {
            config.observability.log_level = level;
        }
        if let Ok(json) = std::env::var("PORTICO_LOG_JSON") {
            config.observability.json_logs = matches!(json.as_str(), "1" | "true" | "yes");
        }

        config.ensure_valid()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn ensure_valid(&self) -> Result<()> {
        Validate::validate(self).map_err(PorticoError::from)?;

        if !self.database.url.starts_with("sqlite://") {
            return Err(PorticoError::validation(
                "database URL must start with 'sqlite://'",
            ));
        }

        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Server bind address
    #[validate(length(min = 1, message = "Host cannot be empty"))]
    pub host: String,

    /// Server port
    #[validate(range(min = 1, message = "Port must be between 1 and 65535"))]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080 }
    }
}

impl ServerConfig {
    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[validate(length(min = 1, message = "Database URL cannot be empty"))]
    pub url: String,

    /// Maximum number of connections in the pool
    #[validate(range(min = 1, max = 100, message = "Max connections must be between 1 and 100"))]
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[validate(range(min = 1, max = 60, message = "Connect timeout must be between 1 and 60 seconds"))]
    pub connect_timeout_seconds: u64,

    /// Enable automatic migrations on startup
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./portico.db".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_seconds: 5,
            auto_migrate: true,
        }
    }
}

impl DatabaseConfig {
    /// Get connection timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Default log level filter (overridden by RUST_LOG)
    pub log_level: String,

    /// Emit logs as JSON instead of human-readable text
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string(), json_logs: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.ensure_valid().is_ok());
    }

    #[test]
    fn rejects_non_sqlite_url() {
        let mut config = AppConfig::default();
        config.database.url = "mysql://localhost/portico".to_string();
        assert!(config.ensure_valid().is_err());
    }

    #[test]
    fn rejects_empty_host() {
        let mut config = AppConfig::default();
        config.server.host = String::new();
        assert!(config.ensure_valid().is_err());
    }

    #[test]
    fn rejects_zero_max_connections() {
        let mut config = AppConfig::default();
        config.database.max_connections = 0;
        assert!(config.ensure_valid().is_err());
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        let server = ServerConfig { host: "0.0.0.0".to_string(), port: 9090 };
        assert_eq!(server.bind_address(), "0.0.0.0:9090");
    }
}
