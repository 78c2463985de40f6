//! Storage repositories.

pub mod route;

pub use route::{
    Route, RouteFilter, RouteRecord, RouteStore, SqlRouteStore, RESERVED_PATH_PREFIXES,
};
