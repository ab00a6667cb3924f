// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Content API client for path-addressed, version-tokened files

use crate::config::ContentTarget;
use crate::error::{RelayError, Result};
use crate::models::{ContentMetadata, ContentWrite};
use axum::{
    body::Bytes,
    response::{IntoResponse, Response},
};
use reqwest::{
    header::{HeaderValue, CONTENT_TYPE, USER_AGENT},
    Client, Method, RequestBuilder, StatusCode,
};

/// Fixed client identifier sent to the content API
pub const CLIENT_IDENTIFIER: &str = "device-relay";

/// Upstream answer relayed to the caller unchanged
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        match self.content_type {
            Some(content_type) => {
                response.headers_mut().insert(CONTENT_TYPE, content_type);
            }
            None => {
                response.headers_mut().remove(CONTENT_TYPE);
            }
        }
        response
    }
}

/// Client bound to a single remote file
pub struct ContentClient<'a> {
    http: &'a Client,
    url: String,
    token: &'a str,
}

impl<'a> ContentClient<'a> {
    pub fn new(http: &'a Client, api_url: &str, target: &'a ContentTarget) -> Self {
        let url = format!(
            "{}/repos/{}/contents/{}",
            api_url.trim_end_matches('/'),
            target.repo,
            target.path.trim_start_matches('/')
        );

        Self {
            http,
            url,
            token: &target.token,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.http
            .request(method, &self.url)
            .bearer_auth(self.token)
            .header(USER_AGENT, CLIENT_IDENTIFIER)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Current version token of the file, `None` when it does not exist yet
    pub async fn current_sha(&self) -> Result<Option<String>> {
        let response = self.request(Method::GET).send().await?;

        match response.status() {
            StatusCode::OK => {
                let meta: ContentMetadata = response
                    .json()
                    .await
                    .map_err(|e| RelayError::InvalidMetadata(e.to_string()))?;
                Ok(meta.sha.filter(|sha| !sha.is_empty()))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(RelayError::ContentLookup {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// Write the file and hand back whatever the API answered
    pub async fn write(&self, payload: &ContentWrite) -> Result<UpstreamReply> {
        let response = self.request(Method::PUT).json(payload).send().await?;

        let status = response.status();
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response.bytes().await?;

        Ok(UpstreamReply {
            status,
            content_type,
            body,
        })
    }
}
