//! # Observability
//!
//! Structured logging via the tracing ecosystem. `RUST_LOG` overrides the
//! configured default filter.

use crate::config::ObservabilityConfig;
use crate::errors::{PorticoError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| PorticoError::config(format!("Invalid log filter: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| PorticoError::config(format!("Failed to init tracing: {}", e)))?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| PorticoError::config(format!("Failed to init tracing: {}", e)))?;
    }

    Ok(())
}
