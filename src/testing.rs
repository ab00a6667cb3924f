// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Fixtures shared by the unit tests

use crate::config::Config;
use crate::create_router;
use crate::state::AppState;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;

pub const DEVICE_KEY: &str = "device-secret";

/// Fully configured relay pointing at an unreachable upstream
pub fn test_config() -> Config {
    Config {
        port: 3000,
        host: "127.0.0.1".to_string(),
        log_level: "info".to_string(),
        device_key: Some(DEVICE_KEY.to_string()),
        ga_measurement_id: Some("G-TEST".to_string()),
        ga_api_secret: Some("ga-secret".to_string()),
        analytics_endpoint: "http://127.0.0.1:1/mp/collect".to_string(),
        repo: Some("owner/log".to_string()),
        file_path: Some("data.json".to_string()),
        github_token: Some("gh-token".to_string()),
        content_api_url: "http://127.0.0.1:1".to_string(),
        commit_message: "update from device via relay".to_string(),
        max_body_bytes: 1024 * 1024,
    }
}

/// Point both upstreams at a stub server
pub fn with_upstream(mut config: Config, url: &str) -> Config {
    config.analytics_endpoint = format!("{url}/mp/collect");
    config.content_api_url = url.to_string();
    config
}

pub fn app(config: Config) -> Router {
    create_router(Arc::new(AppState::new(config)))
}

pub fn device_request(uri: &str, key: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(key) = key {
        builder = builder.header("x-device-key", key);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
