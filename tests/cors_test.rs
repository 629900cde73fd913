#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::test_app;
use grocery_daemon::cors::build_cors_layer;
use tower::ServiceExt;

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/items/item-1")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_preflight_allows_configured_origin() {
    let app = test_app()
        .layer(build_cors_layer(vec!["http://localhost".to_string()]));

    let response = app.oneshot(preflight("http://localhost:3000")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_preflight_rejects_other_origin() {
    let app = test_app()
        .layer(build_cors_layer(vec!["http://localhost".to_string()]));

    let response = app.oneshot(preflight("https://evil.example")).await.unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_wildcard_allows_any_origin() {
    let app = test_app()
        .layer(build_cors_layer(vec!["*".to_string()]));

    let response = app.oneshot(preflight("https://anywhere.example")).await.unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_some());
}
