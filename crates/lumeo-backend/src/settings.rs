// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration gate for the hosted backend.
//!
//! The backend is "configured" only when both the base URL and the
//! service key are present and pass the format checks. The gate runs
//! before a client is ever constructed, so an unconfigured or
//! placeholder setup fails with a remediation message and never
//! attempts a network call.

use lumeo_config::model::BackendConfig;
use lumeo_core::error::LumeoError;

use crate::client::BackendClient;

/// Documentation placeholder that ships in the sample config. Its
/// presence means the operator never filled in a real project host.
pub const PLACEHOLDER_FRAGMENT: &str = "your-project-id";

/// Service keys issued by the hosted backend are JWTs; every valid key
/// starts with the base64 of `{"` .
pub const SERVICE_KEY_PREFIX: &str = "eyJ";

/// Backend connection settings as taken from the configuration object.
#[derive(Clone, Default)]
pub struct BackendSettings {
    base_url: Option<String>,
    service_key: Option<String>,
}

impl std::fmt::Debug for BackendSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendSettings")
            .field("base_url", &self.base_url)
            .field(
                "service_key",
                &self.service_key.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

impl BackendSettings {
    pub fn new(base_url: Option<String>, service_key: Option<String>) -> Self {
        Self {
            base_url,
            service_key,
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.base_url.clone(), config.service_key.clone())
    }

    /// True when `client()` would succeed.
    pub fn is_configured(&self) -> bool {
        self.check().is_ok()
    }

    /// Build a client for the hosted backend, or fail with a
    /// configuration error carrying the remediation step. No network
    /// call is made here or by any operation before this gate passes.
    pub fn client(&self) -> Result<BackendClient, LumeoError> {
        let (base_url, service_key) = self.check()?;
        BackendClient::new(base_url, service_key)
    }

    fn check(&self) -> Result<(&str, &str), LumeoError> {
        let base_url = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                LumeoError::Config(
                    "backend.base_url is not set; add it to lumeo.toml (or LUMEO_BACKEND_BASE_URL) \
                     to enable live data"
                        .to_string(),
                )
            })?;

        if !base_url.starts_with("https://") {
            return Err(LumeoError::Config(format!(
                "backend.base_url `{base_url}` must use https"
            )));
        }

        if base_url.contains(PLACEHOLDER_FRAGMENT) {
            return Err(LumeoError::Config(format!(
                "backend.base_url still contains the documentation placeholder \
                 `{PLACEHOLDER_FRAGMENT}`; replace it with your real project host"
            )));
        }

        let service_key = self
            .service_key
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                LumeoError::Config(
                    "backend.service_key is not set; add it to lumeo.toml (or \
                     LUMEO_BACKEND_SERVICE_KEY) to enable live data"
                        .to_string(),
                )
            })?;

        if !service_key.starts_with(SERVICE_KEY_PREFIX) {
            return Err(LumeoError::Config(
                "backend.service_key does not look like a service key (expected a JWT beginning \
                 with `eyJ`)"
                    .to_string(),
            ));
        }

        Ok((base_url, service_key))
    }
}
