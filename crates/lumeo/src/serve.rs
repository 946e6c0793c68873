// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lumeo serve` command implementation.
//!
//! Wires the validated configuration into concrete components: the live
//! backend collections or the static fallback store, the inquiry sink,
//! and the admin gate, then binds the HTTP server. Every optional
//! integration degrades independently with a logged reason.

use std::sync::Arc;

use tracing::{info, warn};

use lumeo_admin::AdminGate;
use lumeo_backend::BackendSettings;
use lumeo_config::model::LumeoConfig;
use lumeo_content::StaticStore;
use lumeo_core::error::LumeoError;
use lumeo_core::{ContentStore, LeadStore};
use lumeo_forms::{FormSink, HttpFormSink};
use lumeo_gateway::{start_server, AppState, FeatureStatus};

/// Runs the `lumeo serve` command.
pub async fn run_serve(config: LumeoConfig) -> Result<(), LumeoError> {
    init_tracing(&config.server.log_level);

    info!("starting lumeo serve");

    let backend = BackendSettings::from_config(&config.backend);
    let (leads, content, backend_configured): (Arc<dyn LeadStore>, Arc<dyn ContentStore>, bool) =
        match backend.client() {
            Ok(client) => {
                info!("hosted backend configured, serving live data");
                (Arc::new(client.leads()), Arc::new(client.posts()), true)
            }
            Err(reason) => {
                warn!(%reason, "hosted backend not configured, serving the static demo dataset");
                let store = Arc::new(StaticStore::new());
                (
                    store.clone() as Arc<dyn LeadStore>,
                    store as Arc<dyn ContentStore>,
                    false,
                )
            }
        };

    let sink: Option<Arc<dyn FormSink>> = match HttpFormSink::from_config(&config.forms) {
        Ok(sink) => Some(Arc::new(sink)),
        Err(reason) => {
            warn!(%reason, "inquiry delivery disabled");
            None
        }
    };

    let gate = Arc::new(AdminGate::from_config(&config.admin));
    if !gate.is_configured() {
        warn!("admin.password_hash is not set, admin dashboard logins are disabled");
    }

    let features = FeatureStatus {
        backend_configured,
        forms_configured: sink.is_some(),
        generation_available: config.generation.api_key.is_some(),
    };

    let state = AppState {
        leads,
        content,
        sink,
        gate,
        forms: config.forms.clone(),
        features,
    };

    start_server(&config.server.host, config.server.port, state).await
}

fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
