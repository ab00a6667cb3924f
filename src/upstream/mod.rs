// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Clients for the third-party APIs the relay forwards to

pub mod analytics;
pub mod content;
