//! Common test utilities

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use grocery_daemon::{build_router, AppState, ItemStore};
use serde_json::Value;
use tower::ServiceExt;

/// A router over a fresh, empty store.
#[allow(dead_code)] // Test utility for integration tests
pub fn test_app() -> Router {
    build_router(AppState::new(ItemStore::new()))
}

/// Status and raw body of a response.
#[allow(dead_code)] // Test utility for integration tests
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    #[allow(dead_code)] // Test utility for integration tests
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }
}

/// Send one request through the router.
#[allow(dead_code)] // Test utility for integration tests
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}

/// POST an item and return its assigned id.
#[allow(dead_code)] // Test utility for integration tests
pub async fn create(app: &Router, name: &str, quantity: i64) -> String {
    let body = serde_json::json!({ "Name": name, "Quantity": quantity }).to_string();
    let response = send(app, Method::POST, "/items", Some(&body)).await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()["Id"]
        .as_str()
        .expect("created item should carry an Id")
        .to_string()
}
