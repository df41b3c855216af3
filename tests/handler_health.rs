mod common;

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkhandler::api::handlers::health_handler;

use common::StubRecordRepository;

fn test_app(repository: StubRecordRepository) -> Router {
    let state = common::create_test_state(Arc::new(repository));
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = TestServer::new(test_app(StubRecordRepository::empty())).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["tab_registry"]["status"], "ok");
    assert_eq!(json["checks"]["tab_registry"]["message"], "3 tabs configured");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = TestServer::new(test_app(StubRecordRepository::empty())).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("tab_registry").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded_database() {
    let server = TestServer::new(test_app(StubRecordRepository::unhealthy())).unwrap();

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert_eq!(json["checks"]["database"]["message"], "Database connection failed");
    assert_eq!(json["checks"]["tab_registry"]["status"], "ok");
}
