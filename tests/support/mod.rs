//! Shared helpers for HTTP integration tests.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use taskdeck::http::middleware::rate_limit::FixedWindowLimiter;
use taskdeck::http::{AppState, build_router};
use taskdeck::task::adapters::memory::InMemoryTaskStore;
use taskdeck::task::services::TaskService;

/// One-hour window so ordinary tests never trip the limiter.
const TEST_WINDOW_MS: u64 = 3_600_000;

/// Builds a router over a fresh in-memory store with the given rate limit.
pub fn router_with_limit(max_requests: u64) -> Router {
    let clock = Arc::new(DefaultClock);
    let service = TaskService::new(Arc::new(InMemoryTaskStore::new()), clock.clone());
    let limiter = Arc::new(FixedWindowLimiter::new(TEST_WINDOW_MS, max_requests, clock));
    let state = AppState::new(service, limiter);
    build_router(state, "http://localhost:3000").expect("router should build")
}

/// Builds a router with a rate limit high enough to be irrelevant.
pub fn router() -> Router {
    router_with_limit(1_000)
}

/// Builds a JSON request with the given method, URI, and body.
pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

/// Builds a bodyless request with the given method and URI.
pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

/// Sends a request through the router and decodes the JSON envelope.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should complete");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, body)
}

/// Creates a task through the API and returns its `data` object.
pub async fn create_task(app: &Router, body: &Value) -> Value {
    let (status, envelope) = send(app, json_request(Method::POST, "/api/v1/tasks", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    envelope
        .get("data")
        .cloned()
        .expect("created task in envelope")
}

/// Extracts the task id string from a task `data` object.
pub fn task_id(data: &Value) -> String {
    data.get("id")
        .and_then(Value::as_str)
        .expect("task id in data")
        .to_owned()
}
