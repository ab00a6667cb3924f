// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Request, response and upstream payload models

pub mod payloads;
pub mod requests;
pub mod responses;

pub use payloads::*;
pub use requests::*;
pub use responses::*;
