// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Application state for device-relay

use crate::config::Config;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Shared application state
///
/// Nothing in here is mutated after startup; every request reads the same
/// configuration and reuses the same outbound HTTP client.
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            started_at: Utc::now(),
        }
    }

    /// Whether the telemetry relay has everything it needs to forward events
    pub fn telemetry_configured(&self) -> bool {
        self.config.analytics_credentials().is_ok() && self.config.device_key().is_some()
    }

    /// Whether the storage proxy has everything it needs to write payloads
    pub fn storage_configured(&self) -> bool {
        self.config.content_target().is_ok() && self.config.device_key().is_some()
    }
}

pub type SharedState = Arc<AppState>;
