//! # HTTP API
//!
//! Axum router, handlers, and error mapping for the backend REST surface.

pub mod docs;
pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::{build_router, ApiState};
