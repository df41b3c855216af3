mod common;

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkhandler::api::handlers::{tab_handler, tabs_handler};

use common::StubRecordRepository;

fn test_server() -> TestServer {
    let state = common::create_test_state(Arc::new(StubRecordRepository::empty()));
    let app = Router::new()
        .route("/api/tabs", get(tabs_handler))
        .route("/api/tabs/{anchor_type}", get(tab_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_tabs_preserve_configuration_order() {
    let server = test_server();

    let response = server.get("/api/tabs").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let tabs = json["tabs"].as_array().unwrap();

    let order: Vec<&str> = tabs
        .iter()
        .map(|tab| tab["anchor_type"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["page", "file", "news"]);

    assert!(tabs.iter().all(|tab| tab["active"] == false));
}

#[tokio::test]
async fn test_tabs_active_flag_follows_current_href() {
    let server = test_server();

    let response = server
        .get("/api/tabs")
        .add_query_param("current_href", "record:news:tx_news_domain_model_news:42")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let tabs = json["tabs"].as_array().unwrap();

    assert_eq!(tabs[0]["anchor_type"], "page");
    assert_eq!(tabs[0]["active"], false);
    assert_eq!(tabs[2]["anchor_type"], "news");
    assert_eq!(tabs[2]["active"], true);
}

#[tokio::test]
async fn test_tabs_malformed_current_href_activates_nothing() {
    let server = test_server();

    let response = server
        .get("/api/tabs")
        .add_query_param("current_href", "https://example.com/contact")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let tabs = json["tabs"].as_array().unwrap();

    assert_eq!(tabs.len(), 3);
    assert!(tabs.iter().all(|tab| tab["active"] == false));
}

#[tokio::test]
async fn test_single_tab() {
    let server = test_server();

    let response = server.get("/api/tabs/file").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["anchor_type"], "file");
    assert_eq!(json["label"], "File");
    assert_eq!(json["enable_search_box"], false);
    assert_eq!(json["allowed_tables"], serde_json::json!(["sys_file"]));
}

#[tokio::test]
async fn test_unknown_anchor_type_is_configuration_error() {
    let server = test_server();

    let response = server.get("/api/tabs/calendar").await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "configuration_error");
    assert_eq!(json["error"]["details"]["anchor_type"], "calendar");
}
