//! End-to-end tests for the routes resource over the full HTTP router.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use portico::api::build_router;
use portico::config::DatabaseConfig;
use portico::storage::{create_pool, SqlRouteStore};

async fn test_server() -> TestServer {
    let pool = create_pool(&DatabaseConfig {
        url: "sqlite://:memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        auto_migrate: true,
        ..Default::default()
    })
    .await
    .expect("pool");

    let router = build_router(Arc::new(SqlRouteStore::new(pool)));
    TestServer::new(router).expect("test server")
}

#[tokio::test]
async fn create_list_update_delete_round_trip() {
    let server = test_server().await;

    // Create
    let response = server
        .post("/routes")
        .json(&json!({
            "methods": ["GET"],
            "path": "/test",
            "controller": "Acme-Foo",
            "config": {}
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Route successful created"));

    // List with search finds exactly the created route, controller stored
    // in internal separator form.
    let response = server.get("/routes").add_query_param("search", "test").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["totalItems"], json!(1));
    assert_eq!(body["startIndex"], json!(0));
    let entry = &body["entry"][0];
    assert_eq!(entry["path"], json!("/test"));
    assert_eq!(entry["controller"], json!("Acme\\Foo"));
    assert_eq!(entry["methods"], json!(["GET"]));
    let id = entry["id"].as_i64().expect("id");

    // Update replaces the row, applying the same controller transform.
    let response = server
        .put("/routes")
        .json(&json!({
            "id": id,
            "methods": ["GET"],
            "path": "/test",
            "controller": "Acme-Bar",
            "config": {}
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Route successful updated"));

    let response = server.get("/routes").add_query_param("search", "test").await;
    let body: Value = response.json();
    assert_eq!(body["entry"][0]["controller"], json!("Acme\\Bar"));
    assert_eq!(body["entry"][0]["id"], json!(id));

    // Delete removes it from subsequent listings.
    let response = server.delete("/routes").json(&json!({ "id": id })).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Route successful deleted"));

    let response = server.get("/routes").await;
    let body: Value = response.json();
    assert_eq!(body["totalItems"], json!(0));
    assert_eq!(body["entry"].as_array().expect("entry array").len(), 0);
}

#[tokio::test]
async fn listing_hides_reserved_prefixes() {
    let server = test_server().await;

    for path in ["/backend/routes", "/documentation/1", "/public"] {
        let response = server
            .post("/routes")
            .json(&json!({
                "methods": ["GET"],
                "path": path,
                "controller": "Acme-Foo",
                "config": {}
            }))
            .await;
        response.assert_status_ok();
    }

    let response = server.get("/routes").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["totalItems"], json!(1));
    assert_eq!(body["entry"][0]["path"], json!("/public"));
}

#[tokio::test]
async fn listing_orders_by_descending_id() {
    let server = test_server().await;

    for path in ["/first", "/second", "/third"] {
        server
            .post("/routes")
            .json(&json!({
                "methods": ["GET"],
                "path": path,
                "controller": "Acme-Foo",
                "config": {}
            }))
            .await
            .assert_status_ok();
    }

    let response = server.get("/routes").await;
    let body: Value = response.json();
    let ids: Vec<i64> = body["entry"]
        .as_array()
        .expect("entry array")
        .iter()
        .map(|e| e["id"].as_i64().expect("id"))
        .collect();

    let mut sorted = ids.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
    assert_eq!(body["entry"][0]["path"], json!("/third"));
}

#[tokio::test]
async fn invalid_payload_returns_field_errors() {
    let server = test_server().await;

    let response = server
        .post("/routes")
        .json(&json!({
            "methods": [],
            "path": "relative",
            "controller": "",
            "config": {}
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], json!("bad_request"));
    let message = body["message"].as_str().expect("message");
    assert!(message.contains("methods"));
    assert!(message.contains("path"));
    assert!(message.contains("controller"));

    // Nothing was persisted.
    let response = server.get("/routes").await;
    let body: Value = response.json();
    assert_eq!(body["totalItems"], json!(0));
}

#[tokio::test]
async fn delete_unknown_id_returns_not_found() {
    let server = test_server().await;

    let response = server.delete("/routes").json(&json!({ "id": 12345 })).await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"], json!("not_found"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = test_server().await;

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["paths"]["/routes"].is_object());
}
