// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Inbound request models

use serde::Serialize;
use serde_json::{Map, Value};

/// Event name used when a device does not name one
pub const DEFAULT_EVENT_NAME: &str = "feedback_submitted";

/// A single analytics event built from a device request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryEvent {
    pub name: String,
    pub params: Map<String, Value>,
}

impl TelemetryEvent {
    /// Build an event from a parsed request body.
    ///
    /// `event` is taken when it is a non-empty string and `params` when it is
    /// an object; anything else falls back to the defaults.
    pub fn from_body(body: &Value) -> Self {
        let name = body
            .get("event")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_EVENT_NAME)
            .to_string();

        let params = body
            .get("params")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Self { name, params }
    }
}
