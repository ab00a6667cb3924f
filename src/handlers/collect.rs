// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Telemetry relay handler

use crate::auth;
use crate::body::read_json_body;
use crate::error::Result;
use crate::models::{CollectPayload, CollectResponse, TelemetryEvent};
use crate::state::SharedState;
use crate::upstream::analytics;
use axum::{body::Body, extract::State, http::HeaderMap, Json};
use tracing::info;

/// POST /api/collect - Relay one device event to the analytics endpoint
///
/// Checks run in order: analytics secrets, body, device key.
pub async fn collect(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Body,
) -> Result<Json<CollectResponse>> {
    let credentials = state.config.analytics_credentials()?;
    let request = read_json_body(body, state.config.max_body_bytes).await?;
    auth::verify_device_key(&state.config, &headers)?;

    let event = TelemetryEvent::from_body(&request);
    let event_name = event.name.clone();
    let payload = CollectPayload::single(auth::device_id(&headers), event);

    analytics::send(
        &state.http,
        &state.config.analytics_endpoint,
        &credentials,
        &payload,
    )
    .await?;

    info!(device_id = %payload.client_id, event = %event_name, "telemetry event relayed");

    Ok(Json(CollectResponse::ok(event_name)))
}

#[cfg(test)]
mod tests {
    use crate::auth::DEVICE_ID_HEADER;
    use crate::testing::{app, device_request, send, test_config, with_upstream, DEVICE_KEY};
    use axum::http::StatusCode;
    use mockito::{Matcher, Server};
    use serde_json::json;

    const URI: &str = "/api/collect";

    #[tokio::test]
    async fn test_missing_secrets_fail_before_anything_else() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        for clear_id in [true, false] {
            let mut config = with_upstream(test_config(), &server.url());
            if clear_id {
                config.ga_measurement_id = None;
            } else {
                config.ga_api_secret = None;
            }

            let (status, body) = send(
                app(config.clone()),
                device_request(URI, Some(DEVICE_KEY), r#"{"event":"ping"}"#),
            )
            .await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "Analytics credentials not configured");

            let (status, _) = send(app(config), device_request(URI, None, "{broken")).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let config = with_upstream(test_config(), &server.url());
        let (status, body) = send(
            app(config),
            device_request(URI, Some(DEVICE_KEY), "{\"event\":"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Invalid JSON"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_or_wrong_device_key() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let config = with_upstream(test_config(), &server.url());
        for key in [None, Some("wrong-key")] {
            let (status, body) = send(
                app(config.clone()),
                device_request(URI, key, r#"{"event":"ping"}"#),
            )
            .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, "Unauthorized");
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_event_relayed() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Regex("^/mp/collect".to_string()))
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("measurement_id".into(), "G-TEST".into()),
                Matcher::UrlEncoded("api_secret".into(), "ga-secret".into()),
            ]))
            .match_body(Matcher::Json(json!({
                "client_id": "esp-01",
                "events": [{"name": "ping", "params": {"a": 1}}]
            })))
            .with_status(200)
            .create_async()
            .await;

        let config = with_upstream(test_config(), &server.url());
        let mut request = device_request(URI, Some(DEVICE_KEY), r#"{"event":"ping","params":{"a":1}}"#);
        request
            .headers_mut()
            .insert(DEVICE_ID_HEADER, "esp-01".parse().unwrap());

        let (status, body) = send(app(config), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status":"OK","event":"ping"}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_defaults_for_anonymous_device_without_event() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Regex("^/mp/collect".to_string()))
            .match_body(Matcher::Json(json!({
                "client_id": "anonymous",
                "events": [{"name": "feedback_submitted", "params": {"b": 2}}]
            })))
            .with_status(204)
            .create_async()
            .await;

        let config = with_upstream(test_config(), &server.url());
        let (status, body) = send(
            app(config),
            device_request(URI, Some(DEVICE_KEY), r#"{"params":{"b":2}}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status":"OK","event":"feedback_submitted"}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_body_is_accepted() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Regex("^/mp/collect".to_string()))
            .match_body(Matcher::Json(json!({
                "client_id": "anonymous",
                "events": [{"name": "feedback_submitted", "params": {}}]
            })))
            .with_status(204)
            .create_async()
            .await;

        let config = with_upstream(test_config(), &server.url());
        let (status, _) = send(app(config), device_request(URI, Some(DEVICE_KEY), "")).await;

        assert_eq!(status, StatusCode::OK);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upstream_failure_is_relayed() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .with_status(403)
            .with_body("api secret rejected")
            .expect(1)
            .create_async()
            .await;

        let config = with_upstream(test_config(), &server.url());
        let (status, body) = send(
            app(config),
            device_request(URI, Some(DEVICE_KEY), r#"{"event":"ping"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, "Analytics error 403: api secret rejected");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_does_not_leak_secret() {
        let (status, body) = send(
            app(test_config()),
            device_request(URI, Some(DEVICE_KEY), r#"{"event":"ping"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!body.contains("ga-secret"), "{body}");
        assert!(!body.contains("G-TEST"), "{body}");
    }
}
