#![allow(dead_code)]

use std::sync::Arc;

use adsmith_api::config::{ServerConfig, StorageConfig};
use adsmith_api::router::build_router;
use adsmith_api::state::AppState;
use adsmith_db::MemoryStore;
use adsmith_genai::testing::ScriptedProvider;
use adsmith_genai::OpenAiConfig;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        storage: StorageConfig::Memory,
        provider: OpenAiConfig::with_api_key("sk-test"),
    }
}

/// Build the full application router over the given store and provider.
///
/// Uses the same [`build_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(store: Arc<MemoryStore>, provider: Arc<ScriptedProvider>) -> Router {
    let state = AppState { store, provider };
    build_router(state, &test_config()).unwrap()
}

/// A fresh store and a provider with nothing queued.
pub fn fixtures() -> (Arc<MemoryStore>, Arc<ScriptedProvider>) {
    (Arc::new(MemoryStore::new()), Arc::new(ScriptedProvider::new()))
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn post_raw(app: Router, uri: &str, raw: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn summer_sale() -> serde_json::Value {
    serde_json::json!({
        "name": "Summer Sale",
        "industry": "Retail",
        "audience": "Young adults",
        "tone": "exciting"
    })
}

/// Create a campaign through the API and return its id.
pub async fn create_campaign(app: Router, body: serde_json::Value) -> String {
    let response = post_json(app, "/api/campaigns", body).await;
    let json = body_json(response).await;
    json["data"]["campaign"]["id"].as_str().unwrap().to_string()
}
