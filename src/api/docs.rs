use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[allow(unused_imports)]
use crate::storage::Route;
#[allow(unused_imports)]
use crate::validation::{
    CreateRouteBody, DeleteRouteBody, MessageResponse, RouteCollection, UpdateRouteBody,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::routes::list_routes_handler,
        crate::api::handlers::routes::create_route_handler,
        crate::api::handlers::routes::update_route_handler,
        crate::api::handlers::routes::delete_route_handler,
    ),
    components(schemas(
        Route,
        RouteCollection,
        CreateRouteBody,
        UpdateRouteBody,
        DeleteRouteBody,
        MessageResponse,
        crate::api::handlers::health::HealthResponse,
    )),
    tags(
        (name = "routes", description = "Managed API route definitions"),
        (name = "health", description = "Service liveness"),
    ),
    info(
        title = "Portico Backend API",
        description = "Route management endpoints for the Portico backend"
    )
)]
pub struct ApiDoc;

/// Router exposing the generated OpenAPI document and Swagger UI.
pub fn docs_router() -> Router {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_includes_route_operations() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("openapi json");

        assert!(doc["paths"]["/health"]["get"].is_object());
        for method in ["get", "post", "put", "delete"] {
            assert!(
                doc["paths"]["/routes"][method].is_object(),
                "missing {} operation on /routes",
                method
            );
        }

        let schemas = &doc["components"]["schemas"];
        for name in ["Route", "RouteCollection", "CreateRouteBody", "UpdateRouteBody", "DeleteRouteBody", "MessageResponse"] {
            assert!(schemas[name].is_object(), "missing schema {}", name);
        }
    }
}
