// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Response models for the device-relay API

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check and status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Service is healthy
    pub healthy: bool,
    /// Relay version
    pub version: String,
    /// Process start time
    pub started_at: DateTime<Utc>,
    /// Telemetry relay has its secrets
    pub telemetry_configured: bool,
    /// Storage proxy has its target and credential
    pub storage_configured: bool,
}

/// Normalized success body of the telemetry relay
#[derive(Debug, Serialize)]
pub struct CollectResponse {
    pub status: &'static str,
    pub event: String,
}

impl CollectResponse {
    pub fn ok(event: impl Into<String>) -> Self {
        Self {
            status: "OK",
            event: event.into(),
        }
    }
}
