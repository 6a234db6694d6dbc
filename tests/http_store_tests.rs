//! End-to-end tests for the client store over real HTTP.
//!
//! Each test starts a local axum server standing in for the insult REST API
//! and the UI config document.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Json;
use serde_json::{json, Value};

use insult_client::{
    ClientState, Commands, ConfigSource, Container, ContainerConfig, HttpConfigSource,
    HttpInsultApi, InsultStore, Router, REQUEST_ERROR_MARKER,
};

/// Start the fake backend and return its base URL.
async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let base = format!("http://{}", listener.local_addr().unwrap());

    let config_base = base.clone();
    let app = axum::Router::new()
        .route(
            "/insult",
            get(|| async { Json(json!({"adj": ["vile", "rank"], "noun": "knave"})) }).post(
                |Json(request): Json<Value>| async move {
                    Json(json!({"subject": request["name"], "adj": ["vile"], "noun": "knave"}))
                },
            ),
        )
        .route(
            "/wrapped/insult",
            get(|| async {
                Json(Value::String(
                    r#"{"adj":["base"],"noun":"churl"}"#.to_string(),
                ))
            }),
        )
        .route(
            "/broken/insult",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/ui/default.json",
            get(move || {
                let api_base_url = config_base.clone();
                async move { Json(json!({ "apiBaseUrl": api_base_url })) }
            }),
        );

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base
}

fn store_at(base_url: &str) -> InsultStore {
    InsultStore::new(ClientState::new(base_url), Arc::new(HttpInsultApi::new()))
}

#[tokio::test]
async fn test_get_insult_over_http() {
    let base = spawn_backend().await;
    let store = store_at(&base);

    store.update_insult().await;

    assert_eq!(store.snapshot().await.current_insult, "Thou vile, rank knave");
}

#[tokio::test]
async fn test_named_insult_posts_subject() {
    let base = spawn_backend().await;
    let store = store_at(&base);

    store.update_subject("Bob").await;
    store.update_insult().await;

    assert_eq!(
        store.snapshot().await.current_insult,
        "Bob, thou art an vile knave"
    );
}

#[tokio::test]
async fn test_string_encoded_body_is_unwrapped() {
    let base = spawn_backend().await;
    let store = store_at(&format!("{base}/wrapped"));

    assert_eq!(store.update_insult().await, "Thou base churl");
}

#[tokio::test]
async fn test_server_error_sets_marker() {
    let base = spawn_backend().await;
    let store = store_at(&format!("{base}/broken"));

    store.update_insult().await;

    assert_eq!(store.snapshot().await.current_insult, REQUEST_ERROR_MARKER);
}

#[tokio::test]
async fn test_connection_refused_sets_marker() {
    let store = store_at("http://127.0.0.1:1");

    assert_eq!(store.update_insult().await, REQUEST_ERROR_MARKER);
}

#[tokio::test]
async fn test_config_document_redirects_api() {
    let base = spawn_backend().await;
    let store = store_at("http://127.0.0.1:1")
        .with_config_source(Arc::new(HttpConfigSource::new(&format!("{base}/ui/"))));

    store.load_config().await;
    store.update_insult().await;

    let state = store.snapshot().await;
    assert_eq!(state.api_base_url, base);
    assert_eq!(state.current_insult, "Thou vile, rank knave");
}

#[tokio::test]
async fn test_missing_config_document_is_error() {
    let base = spawn_backend().await;
    let source = HttpConfigSource::new(&format!("{base}/nowhere"));

    let err = source.fetch().await.unwrap_err();

    assert!(err.is_network_error());
}

#[tokio::test]
async fn test_router_prints_insult() {
    let base = spawn_backend().await;
    let container = Container::new(ContainerConfig {
        api_base_url: Some(base),
        page_url: None,
        service_proxies: false,
    })
    .await
    .expect("Failed to build container");
    let router = Router::new(&container);

    let output = router
        .route(Commands::Insult {
            name: Some("Bob".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(output, "Bob, thou art an vile knave");
}
