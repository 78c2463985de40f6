//! HTTP request handlers.

pub mod health;
pub mod routes;

pub use health::health_handler;
pub use routes::{
    create_route_handler, delete_route_handler, list_routes_handler, update_route_handler,
};
