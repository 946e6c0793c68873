// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./lumeo.toml` > `~/.config/lumeo/lumeo.toml` > `/etc/lumeo/lumeo.toml`
//! with environment variable overrides via `LUMEO_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::LumeoConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/lumeo/lumeo.toml` (system-wide)
/// 3. `~/.config/lumeo/lumeo.toml` (user XDG config)
/// 4. `./lumeo.toml` (local directory)
/// 5. `LUMEO_*` environment variables
pub fn load_config() -> Result<LumeoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LumeoConfig::default()))
        .merge(Toml::file("/etc/lumeo/lumeo.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("lumeo/lumeo.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("lumeo.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<LumeoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LumeoConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LumeoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LumeoConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `LUMEO_BACKEND_BASE_URL` must map to
/// `backend.base_url`, not `backend.base.url`.
fn env_provider() -> Env {
    Env::prefixed("LUMEO_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: LUMEO_BACKEND_SERVICE_KEY -> "backend_service_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("backend_", "backend.", 1)
            .replacen("forms_", "forms.", 1)
            .replacen("admin_", "admin.", 1)
            .replacen("generation_", "generation.", 1);
        mapped.into()
    })
}
