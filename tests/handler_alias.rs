mod common;

use axum::{
    Router,
    routing::{delete, get},
};
use axum_test::TestServer;
use snaplink::api::handlers::{check_alias_handler, delete_url_handler};
use snaplink::state::AppState;

fn api_server() -> (TestServer, AppState) {
    let (state, _store) = common::memory_state();
    let app = Router::new()
        .route("/api/urls/check-alias/{alias}", get(check_alias_handler))
        .route("/api/urls/{id}", delete(delete_url_handler))
        .with_state(state.clone());

    (TestServer::new(app).unwrap(), state)
}

#[tokio::test]
async fn test_check_alias_free() {
    let (server, _state) = api_server();

    let response = server.get("/api/urls/check-alias/fresh1").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["available"], true);
}

#[tokio::test]
async fn test_check_alias_taken() {
    let (server, state) = api_server();

    state
        .link_service
        .shorten(
            "https://example.com".to_string(),
            Some("grabbed".to_string()),
        )
        .await
        .unwrap();

    let response = server.get("/api/urls/check-alias/grabbed").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["available"], false);
}

#[tokio::test]
async fn test_check_alias_reserved_unavailable() {
    let (server, _state) = api_server();

    let response = server.get("/api/urls/check-alias/api").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["available"], false);
}

#[tokio::test]
async fn test_delete_acknowledges_without_removing() {
    let (server, state) = api_server();

    let record = state
        .link_service
        .shorten("https://example.com".to_string(), None)
        .await
        .unwrap();

    let response = server.delete(&format!("/api/urls/{}", record.id)).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "URL deleted successfully"
    );

    // Acknowledge-only stub: the record still resolves.
    let still_there = state.link_service.resolve(&record.short_code, None, None).await;
    assert!(still_there.is_ok());
}

#[tokio::test]
async fn test_delete_unknown_id_not_found() {
    let (server, _state) = api_server();

    let response = server.delete("/api/urls/424242").await;

    response.assert_status_not_found();
}
