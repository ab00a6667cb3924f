// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Error types for device-relay

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Only POST allowed")]
    MethodNotAllowed,

    #[error("{0} not configured")]
    MissingConfig(&'static str),

    #[error("Error reading request body: {0}")]
    BodyRead(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Analytics error {}: {body}", .status.as_u16())]
    Analytics { status: StatusCode, body: String },

    #[error("Content API GET error {status}: {body}")]
    ContentLookup { status: u16, body: String },

    #[error("Content API returned unreadable metadata: {0}")]
    InvalidMetadata(String),

    #[error("Upstream connection failed: {0}")]
    UpstreamConnection(#[source] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Request URLs can carry credentials in their query string
impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::UpstreamConnection(err.without_url())
    }
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::MissingConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::BodyRead(_) => StatusCode::BAD_REQUEST,
            RelayError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            RelayError::Unauthorized => StatusCode::UNAUTHORIZED,
            RelayError::Analytics { status, .. } => *status,
            RelayError::ContentLookup { .. } => StatusCode::BAD_GATEWAY,
            RelayError::InvalidMetadata(_) => StatusCode::BAD_GATEWAY,
            RelayError::UpstreamConnection(_) => StatusCode::BAD_GATEWAY,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        tracing::warn!(status = status.as_u16(), "{}", message);

        (status, message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
