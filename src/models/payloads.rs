// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Payloads exchanged with the analytics and content APIs

use super::TelemetryEvent;
use serde::{Deserialize, Serialize};

/// Event batch sent to the collection endpoint
#[derive(Debug, Serialize)]
pub struct CollectPayload {
    pub client_id: String,
    pub events: Vec<TelemetryEvent>,
}

impl CollectPayload {
    pub fn single(client_id: impl Into<String>, event: TelemetryEvent) -> Self {
        Self {
            client_id: client_id.into(),
            events: vec![event],
        }
    }
}

/// File metadata returned by a content lookup
#[derive(Debug, Deserialize)]
pub struct ContentMetadata {
    #[serde(default)]
    pub sha: Option<String>,
}

/// Body of a content write
#[derive(Debug, Serialize)]
pub struct ContentWrite {
    pub message: String,
    /// Base64 encoded file content
    pub content: String,
    /// Version token of the file being replaced; omitted on creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}
