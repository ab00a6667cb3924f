// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Shared JSON request body reader

use crate::error::{RelayError, Result};
use axum::body::{to_bytes, Body};
use serde_json::{Map, Value};

/// Read the whole request body and parse it as JSON.
///
/// An empty body reads as `{}`. Stream faults and bodies over `limit` bytes
/// are read errors; anything else that fails to parse is invalid JSON.
pub async fn read_json_body(body: Body, limit: usize) -> Result<Value> {
    let bytes = to_bytes(body, limit)
        .await
        .map_err(|e| RelayError::BodyRead(e.to_string()))?;

    if bytes.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(&bytes).map_err(RelayError::InvalidJson)
}
