// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Analytics collection endpoint client

use crate::config::AnalyticsCredentials;
use crate::error::{RelayError, Result};
use crate::models::CollectPayload;
use reqwest::Client;

/// Send one event batch to the collection endpoint.
///
/// Credentials travel as query parameters. Any non-2xx answer is returned as
/// an error carrying the upstream status and body.
pub async fn send(
    http: &Client,
    endpoint: &str,
    credentials: &AnalyticsCredentials,
    payload: &CollectPayload,
) -> Result<()> {
    let response = http
        .post(endpoint)
        .query(&[
            ("measurement_id", credentials.measurement_id.as_str()),
            ("api_secret", credentials.api_secret.as_str()),
        ])
        .json(payload)
        .send()
        .await?;

    let status = response.status();
    tracing::debug!(status = status.as_u16(), "collection endpoint answered");

    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(RelayError::Analytics { status, body })
}
