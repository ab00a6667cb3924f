// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Status handler

use crate::models::StatusResponse;
use crate::state::SharedState;
use axum::{extract::State, Json};

/// GET /status - Health check and configuration summary
pub async fn status(State(state): State<SharedState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
        telemetry_configured: state.telemetry_configured(),
        storage_configured: state.storage_configured(),
    })
}
