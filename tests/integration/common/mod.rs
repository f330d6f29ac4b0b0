//! Common test utilities for integration tests

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, Response},
    Router,
};
use forge_common::Config;
use serde_json::Value;
use tower::ServiceExt;

/// Composed application under test
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let router = forge_app::create_app(&config);
        Self { router }
    }

    /// Send one request through a fresh clone of the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn chat(&self, method: Method, body: Option<&str>) -> Response<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(forge_app::STAKEHOLDER_AI_PATH);
        let request = match body {
            Some(b) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }
}

/// Parse response body as JSON Value
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
