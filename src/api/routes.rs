use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::storage::RouteStore;

use super::{
    docs,
    handlers::{
        create_route_handler, delete_route_handler, health_handler, list_routes_handler,
        update_route_handler,
    },
};

/// Shared handler state. The route store is constructor-provided so tests
/// can substitute their own implementation.
#[derive(Clone)]
pub struct ApiState {
    pub route_store: Arc<dyn RouteStore>,
}

pub fn build_router(route_store: Arc<dyn RouteStore>) -> Router {
    let api_state = ApiState { route_store };

    Router::new()
        .route("/routes", get(list_routes_handler))
        .route("/routes", post(create_route_handler))
        .route("/routes", put(update_route_handler))
        .route("/routes", delete(delete_route_handler))
        .route("/health", get(health_handler))
        .with_state(api_state)
        .merge(docs::docs_router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
