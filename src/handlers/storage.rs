// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Storage proxy handler

use crate::auth;
use crate::body::read_json_body;
use crate::error::{RelayError, Result};
use crate::models::ContentWrite;
use crate::state::SharedState;
use crate::upstream::content::{ContentClient, UpstreamReply};
use axum::{body::Body, extract::State, http::HeaderMap};
use base64::prelude::*;
use serde_json::Value;
use tracing::{debug, info};

/// POST /api/iot - Write the request body to the remote content store
///
/// Looks up the file's current version token, then writes the body back
/// through the content API. The write response is returned unchanged,
/// including a version conflict from a concurrent writer.
pub async fn store(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Body,
) -> Result<UpstreamReply> {
    auth::verify_device_key(&state.config, &headers)?;
    let target = state.config.content_target()?;
    let document = read_json_body(body, state.config.max_body_bytes).await?;
    let content = encode_document(&document)?;

    let client = ContentClient::new(&state.http, &state.config.content_api_url, &target);
    let sha = client.current_sha().await?;
    debug!(url = client.url(), sha_present = sha.is_some(), "resolved current version token");

    let reply = client
        .write(&ContentWrite {
            message: state.config.commit_message.clone(),
            content,
            sha,
        })
        .await?;

    info!(
        status = reply.status.as_u16(),
        path = %target.path,
        "content write relayed"
    );

    Ok(reply)
}

/// Compact JSON, base64 encoded
fn encode_document(document: &Value) -> Result<String> {
    let json = serde_json::to_vec(document).map_err(|e| RelayError::Internal(e.to_string()))?;
    Ok(BASE64_STANDARD.encode(json))
}
