//! Routes resource HTTP handlers
//!
//! CRUD operations for the managed `routes` table. Every mutating
//! operation validates the inbound record against its named schema before
//! the store is touched; validation failure aborts with the aggregated
//! field errors and performs no store access.

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;
use validator::Validate;

use crate::{
    api::{error::ApiError, routes::ApiState},
    domain::display_name_to_internal_id,
    errors::PorticoError,
    storage::{RouteFilter, RouteRecord},
    validation::{
        CreateRouteBody, DeleteRouteBody, MessageResponse, RouteCollection, RouteCollectionQuery,
        UpdateRouteBody,
    },
};

fn validation_error(errors: validator::ValidationErrors) -> ApiError {
    ApiError::from(PorticoError::from(errors))
}

#[utoipa::path(
    get,
    path = "/routes",
    params(RouteCollectionQuery),
    responses(
        (status = 200, description = "Route collection", body = RouteCollection),
    ),
    tag = "routes"
)]
pub async fn list_routes_handler(
    State(state): State<ApiState>,
    Query(params): Query<RouteCollectionQuery>,
) -> Result<Json<RouteCollection>, ApiError> {
    params.validate().map_err(validation_error)?;

    // Offsets beyond i64 saturate instead of wrapping negative, so an
    // absurd startIndex yields an empty page rather than the full set.
    let start_index = i64::try_from(params.start_index).unwrap_or(i64::MAX);

    let filter = RouteFilter { search: params.search.clone() };
    let total_items = state.route_store.count(&filter).await.map_err(ApiError::from)?;
    let entry = state.route_store.list(start_index, &filter).await.map_err(ApiError::from)?;

    Ok(Json(RouteCollection { total_items, start_index: params.start_index, entry }))
}

#[utoipa::path(
    post,
    path = "/routes",
    request_body = CreateRouteBody,
    responses(
        (status = 200, description = "Route created", body = MessageResponse),
        (status = 400, description = "Validation error"),
    ),
    tag = "routes"
)]
pub async fn create_route_handler(
    State(state): State<ApiState>,
    Json(payload): Json<CreateRouteBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload.validate().map_err(validation_error)?;

    let record = RouteRecord {
        methods: payload.methods,
        path: payload.path,
        controller: display_name_to_internal_id(&payload.controller),
        config: payload.config,
    };

    let created = state.route_store.create(record).await.map_err(ApiError::from)?;

    info!(id = created.id, path = %created.path, "Route created via API");

    Ok(Json(MessageResponse::success("Route successful created")))
}

#[utoipa::path(
    put,
    path = "/routes",
    request_body = UpdateRouteBody,
    responses(
        (status = 200, description = "Route updated", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Route not found"),
    ),
    tag = "routes"
)]
pub async fn update_route_handler(
    State(state): State<ApiState>,
    Json(payload): Json<UpdateRouteBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload.validate().map_err(validation_error)?;

    let record = RouteRecord {
        methods: payload.methods,
        path: payload.path,
        controller: display_name_to_internal_id(&payload.controller),
        config: payload.config,
    };

    state.route_store.update(payload.id, record).await.map_err(ApiError::from)?;

    info!(id = payload.id, "Route updated via API");

    Ok(Json(MessageResponse::success("Route successful updated")))
}

#[utoipa::path(
    delete,
    path = "/routes",
    request_body = DeleteRouteBody,
    responses(
        (status = 200, description = "Route deleted", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Route not found"),
    ),
    tag = "routes"
)]
pub async fn delete_route_handler(
    State(state): State<ApiState>,
    Json(payload): Json<DeleteRouteBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload.validate().map_err(validation_error)?;

    state.route_store.delete(payload.id).await.map_err(ApiError::from)?;

    info!(id = payload.id, "Route deleted via API");

    Ok(Json(MessageResponse::success("Route successful deleted")))
}
