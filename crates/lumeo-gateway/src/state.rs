// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared state for the HTTP handlers.
//!
//! Everything here is constructed once at startup from the validated
//! configuration object and injected; handlers never read ambient
//! environment state.

use std::sync::Arc;

use lumeo_admin::AdminGate;
use lumeo_config::model::FormsConfig;
use lumeo_core::{ContentStore, LeadStore};
use lumeo_forms::FormSink;
use serde::Serialize;

/// Which optional integrations are live, as decided at startup.
///
/// Also the payload of `GET /v1/admin/status`: the dashboard uses it to
/// show fallback-mode banners and the disabled content-generation
/// placeholder.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureStatus {
    /// Live hosted backend vs static demo data.
    pub backend_configured: bool,
    /// Inquiry delivery endpoint present.
    pub forms_configured: bool,
    /// Content-generation API key present (the pipeline itself does not
    /// ship with this service).
    pub generation_available: bool,
}

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Active lead store (live backend or static fallback).
    pub leads: Arc<dyn LeadStore>,
    /// Active content store (live backend or static fallback).
    pub content: Arc<dyn ContentStore>,
    /// Inquiry delivery sink; `None` when no endpoint is configured.
    pub sink: Option<Arc<dyn FormSink>>,
    /// Admin credential gate and session table.
    pub gate: Arc<AdminGate>,
    /// Form delivery settings (source tag, fallback contact channels).
    pub forms: FormsConfig,
    /// Integration status snapshot.
    pub features: FeatureStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_status_serializes_all_flags() {
        let status = FeatureStatus {
            backend_configured: false,
            forms_configured: true,
            generation_available: false,
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"backend_configured\":false"));
        assert!(json.contains("\"forms_configured\":true"));
        assert!(json.contains("\"generation_available\":false"));
    }
}
