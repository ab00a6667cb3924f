// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Configuration module for device-relay

use crate::error::{RelayError, Result};
use clap::Parser;

/// Relay service forwarding authenticated device telemetry
#[derive(Parser, Debug, Clone)]
#[command(name = "device-relay")]
#[command(author = "Aptove")]
#[command(version)]
#[command(about = "Relay authenticated device telemetry to analytics and content APIs", long_about = None)]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "RELAY_PORT")]
    pub port: u16,

    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "RELAY_HOST")]
    pub host: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", env = "RELAY_LOG_LEVEL")]
    pub log_level: String,

    /// Shared secret devices present in the x-device-key header
    #[arg(long, env = "DEVICE_KEY", hide_env_values = true)]
    pub device_key: Option<String>,

    /// Analytics measurement identifier
    #[arg(long, env = "GA_MEASUREMENT_ID")]
    pub ga_measurement_id: Option<String>,

    /// Analytics API secret
    #[arg(long, env = "GA_API_SECRET", hide_env_values = true)]
    pub ga_api_secret: Option<String>,

    /// Analytics collection endpoint
    #[arg(
        long,
        default_value = "https://www.google-analytics.com/mp/collect",
        env = "RELAY_ANALYTICS_ENDPOINT"
    )]
    pub analytics_endpoint: String,

    /// Target repository for stored payloads (owner/name)
    #[arg(long, env = "REPO")]
    pub repo: Option<String>,

    /// File path inside the target repository
    #[arg(long, env = "FILEPATH")]
    pub file_path: Option<String>,

    /// Bearer token for the content API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Content API base URL
    #[arg(long, default_value = "https://api.github.com", env = "RELAY_CONTENT_API_URL")]
    pub content_api_url: String,

    /// Commit message attached to every stored payload
    #[arg(
        long,
        default_value = "update from device via relay",
        env = "RELAY_COMMIT_MESSAGE"
    )]
    pub commit_message: String,

    /// Maximum accepted request body size in bytes
    #[arg(long, default_value = "1048576", env = "RELAY_MAX_BODY_BYTES")]
    pub max_body_bytes: usize,
}

/// Credentials for the analytics collection endpoint
#[derive(Debug, Clone)]
pub struct AnalyticsCredentials {
    pub measurement_id: String,
    pub api_secret: String,
}

/// Location and credential of the remote file written by the storage proxy
#[derive(Debug, Clone)]
pub struct ContentTarget {
    pub repo: String,
    pub path: String,
    pub token: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Config {
    /// Parse configuration from CLI arguments
    pub fn parse_args() -> Self {
        Config::parse()
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn device_key(&self) -> Option<&str> {
        present(&self.device_key)
    }

    /// Both analytics secrets, or a configuration error naming the relay
    pub fn analytics_credentials(&self) -> Result<AnalyticsCredentials> {
        match (present(&self.ga_measurement_id), present(&self.ga_api_secret)) {
            (Some(measurement_id), Some(api_secret)) => Ok(AnalyticsCredentials {
                measurement_id: measurement_id.to_string(),
                api_secret: api_secret.to_string(),
            }),
            _ => Err(RelayError::MissingConfig("Analytics credentials")),
        }
    }

    /// Repository, path and token for the storage proxy
    pub fn content_target(&self) -> Result<ContentTarget> {
        match (
            present(&self.repo),
            present(&self.file_path),
            present(&self.github_token),
        ) {
            (Some(repo), Some(path), Some(token)) => Ok(ContentTarget {
                repo: repo.to_string(),
                path: path.to_string(),
                token: token.to_string(),
            }),
            _ => Err(RelayError::MissingConfig("Content store target")),
        }
    }
}
