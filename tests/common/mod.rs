#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use product_api::config::AppConfig;
use product_api::database::ProductStore;
use product_api::{app, AppState};

/// Router over a fresh, seeded in-memory store. Requests never touch the network.
#[derive(Clone)]
pub struct TestApp {
    pub router: Router,
    pub store: ProductStore,
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Result<Self> {
        let mut config = AppConfig::default();
        config.api.enable_request_logging = false;

        let store = ProductStore::open(&config.database)
            .await
            .context("failed to open in-memory store")?;
        let router = app(AppState::new(store.clone(), config));

        Ok(Self { router, store })
    }

    pub async fn send(&self, request: Request<Body>) -> Result<TestResponse> {
        let response = self.router.clone().oneshot(request).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .with_context(|| format!("response body is not JSON: {:?}", bytes))?
        };

        Ok(TestResponse { status, headers, body })
    }

    pub async fn json(&self, method: Method, uri: &str, body: Value) -> Result<TestResponse> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?;
        self.send(request).await
    }

    pub async fn empty(&self, method: Method, uri: &str) -> Result<TestResponse> {
        let request = Request::builder().method(method).uri(uri).body(Body::empty())?;
        self.send(request).await
    }

    pub async fn create(&self, body: Value) -> Result<TestResponse> {
        self.json(Method::POST, "/v1/products", body).await
    }

    pub async fn update(&self, body: Value) -> Result<TestResponse> {
        self.json(Method::PATCH, "/v1/products", body).await
    }

    pub async fn find_one(&self, id: impl std::fmt::Display) -> Result<TestResponse> {
        self.empty(Method::GET, &format!("/v1/products/{}", id)).await
    }

    pub async fn remove(&self, id: impl std::fmt::Display) -> Result<TestResponse> {
        self.empty(Method::DELETE, &format!("/v1/products/{}", id)).await
    }

    pub async fn count(&self) -> Result<i64> {
        Ok(self.store.count().await?)
    }
}

pub fn widget() -> Value {
    serde_json::json!({
        "color": "blue",
        "size": "small",
        "name": "widget",
        "cost": 10,
        "retired": 0
    })
}

/// Asserts the standard failure envelope and returns nothing else of interest
pub fn assert_failure(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status, status, "unexpected status: {:?}", response);
    assert_eq!(response.body["success"], false, "success flag: {}", response.body);
    assert!(response.body["data"].is_null(), "failure data should be null: {}", response.body);
    assert_eq!(response.body["message"], message, "message: {}", response.body);
}
