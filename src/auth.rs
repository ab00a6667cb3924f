// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Device authentication

use crate::config::Config;
use crate::error::{RelayError, Result};
use axum::http::HeaderMap;

pub const DEVICE_KEY_HEADER: &str = "x-device-key";
pub const DEVICE_ID_HEADER: &str = "x-device-id";

/// Client id used when a device does not identify itself
pub const ANONYMOUS_DEVICE: &str = "anonymous";

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Check the device shared secret.
///
/// With no device key configured every request is rejected.
pub fn verify_device_key(config: &Config, headers: &HeaderMap) -> Result<()> {
    match (header(headers, DEVICE_KEY_HEADER), config.device_key()) {
        (Some(presented), Some(expected)) if presented == expected => Ok(()),
        _ => Err(RelayError::Unauthorized),
    }
}

pub fn device_id(headers: &HeaderMap) -> String {
    header(headers, DEVICE_ID_HEADER)
        .unwrap_or(ANONYMOUS_DEVICE)
        .to_string()
}
