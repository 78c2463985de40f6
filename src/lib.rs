//! # Portico
//!
//! Portico is the backend service of an API-management platform. This crate
//! implements the routes resource: persisted mappings from an HTTP path
//! pattern and method set to a controller identifier and its configuration,
//! managed through a REST surface.
//!
//! ## Architecture
//!
//! ```text
//! REST API Layer → Schema Validation → Route Store → SQLite
//!        ↓                                  ↓
//!  OpenAPI Docs                     Observability Stack
//! ```
//!
//! ## Core Components
//!
//! - **REST API**: Axum-based HTTP server exposing the routes resource
//! - **Schema Validation**: `validator`-backed request schemas checked
//!   before any persistence access
//! - **Route Store**: SQLx repository over the `routes` table, injected as
//!   a capability so tests can substitute their own implementation

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod observability;
pub mod storage;
pub mod validation;

pub use config::AppConfig;
pub use errors::{PorticoError, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_available() {
        assert!(!VERSION.is_empty());
        assert_eq!(APP_NAME, "portico");
    }
}
