//! # Storage Layer
//!
//! Database pool management, schema migrations, and the route store.

pub mod migrations;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, DbPool};
pub use repositories::{
    Route, RouteFilter, RouteRecord, RouteStore, SqlRouteStore, RESERVED_PATH_PREFIXES,
};
