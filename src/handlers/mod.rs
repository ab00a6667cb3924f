// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers

pub mod collect;
pub mod status;
pub mod storage;

use crate::error::RelayError;

/// Fallback for every method other than POST on the relay routes
pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}
