//! Application configuration.

mod settings;

pub use settings::{AppConfig, DatabaseConfig, ObservabilityConfig, ServerConfig};
