//! Shared helpers for registry API tests

use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use depot_common::Config;

/// Opaque token for protected operations; only presence matters.
pub const TEST_TOKEN: &str = "test-registry-token";

/// Test fixture wrapping the composed application router
#[derive(Clone)]
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            router: depot_app::create_app(&Config::default()),
        }
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            router: depot_app::create_app(config),
        }
    }

    /// Dispatch a request into the router
    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(req).await.unwrap()
    }

    /// Convenience: create an artifact and return its parsed body
    pub async fn create_artifact(&self, kind: &str, name: &str, version: &str) -> Value {
        let resp = self
            .send(authed_request(
                Method::POST,
                "/artifacts",
                Some(serde_json::json!({
                    "kind": kind,
                    "name": name,
                    "version": version,
                    "content": format!("payload-for-{name}"),
                })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        parse_body(resp).await
    }
}

/// Build a request without the registry token header
pub fn anon_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Build a request carrying the X-Authorization token
pub fn authed_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Authorization", TEST_TOKEN);
    match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Parse response body as JSON Value
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
