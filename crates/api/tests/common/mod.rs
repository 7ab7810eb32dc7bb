#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use killrvideo_api::backend::Backend;
use killrvideo_api::config::ServerConfig;
use killrvideo_api::router::build_app_router;
use killrvideo_api::state::AppState;
use killrvideo_core::error::CoreError;
use killrvideo_core::request::RequestKind;
use killrvideo_core::validation::{RequestGuard, RuleCatalog, TracingSink, Validator};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Backend double that records which methods reached it.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    pub calls: Arc<Mutex<Vec<RequestKind>>>,
}

impl RecordingBackend {
    pub fn calls(&self) -> Vec<RequestKind> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for RecordingBackend {
    async fn handle(
        &self,
        request: killrvideo_core::request::Request,
    ) -> Result<Value, CoreError> {
        let kind = request.kind();
        self.calls.lock().unwrap().push(kind);
        Ok(json!({ "handled": kind.method() }))
    }
}

/// Build the full application router, backed by a recording backend.
///
/// Uses the same `build_app_router` as `main.rs` so tests exercise the
/// production middleware stack.
pub fn build_test_app() -> (Router, RecordingBackend) {
    let backend = RecordingBackend::default();
    let config = test_config();
    let validator = Validator::new(RuleCatalog::standard()).unwrap();

    let state = AppState {
        config: Arc::new(config.clone()),
        guard: Arc::new(RequestGuard::new(Arc::new(validator), TracingSink)),
        backend: Arc::new(backend.clone()),
    };

    (build_app_router(state, &config), backend)
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
