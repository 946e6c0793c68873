// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers.

pub mod admin;
pub mod inquiries;
pub mod posts;

use axum::Json;
use serde::Serialize;

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health — unauthenticated liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
