// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Lumeo platform.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.
//!
//! Every external integration is independently optional: a missing value
//! degrades only the dependent feature (form delivery, live backend,
//! admin access, content generation), never the whole service.

use serde::{Deserialize, Serialize};

/// Top-level Lumeo configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LumeoConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Hosted backend data API settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Inquiry form delivery settings.
    #[serde(default)]
    pub forms: FormsConfig,

    /// Admin dashboard gate settings.
    #[serde(default)]
    pub admin: AdminConfig,

    /// AI content-generation settings (key recognized, pipeline not shipped).
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind the server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Hosted backend data API configuration.
///
/// The backend is considered configured only when both values are present
/// and pass the format checks applied by the backend client (secure-HTTP
/// base URL without the documentation placeholder, token with the
/// recognized prefix). Partial or placeholder values are not a startup
/// error; they leave the service in static fallback mode.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Base URL of the hosted data API. `None` selects the static
    /// fallback dataset.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Access token for the hosted data API.
    #[serde(default)]
    pub service_key: Option<String>,
}

/// Inquiry form delivery configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FormsConfig {
    /// External form-processing endpoint URL. `None` disables form
    /// delivery; submissions then answer with the fallback contact
    /// channels below.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Provenance tag stamped on every submission.
    #[serde(default = "default_source_tag")]
    pub source_tag: String,

    /// Direct contact email offered when the submission path is down.
    #[serde(default = "default_fallback_email")]
    pub fallback_email: String,

    /// Direct contact phone offered when the submission path is down.
    #[serde(default = "default_fallback_phone")]
    pub fallback_phone: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            source_tag: default_source_tag(),
            fallback_email: default_fallback_email(),
            fallback_phone: default_fallback_phone(),
        }
    }
}

fn default_source_tag() -> String {
    "Contact Form".to_string()
}

fn default_fallback_email() -> String {
    "hello@lumeo.agency".to_string()
}

fn default_fallback_phone() -> String {
    "+1 (555) 014-0923".to_string()
}

/// Admin dashboard gate configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// Admin account name.
    #[serde(default = "default_admin_username")]
    pub username: String,

    /// Argon2id PHC hash of the admin password. `None` disables the
    /// admin surface entirely.
    #[serde(default)]
    pub password_hash: Option<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            password_hash: None,
        }
    }
}

fn default_admin_username() -> String {
    "admin".to_string()
}

/// AI content-generation configuration.
///
/// The key is recognized so `lumeo doctor` and the admin status report
/// can tell the operator whether generation could be enabled; no
/// generation client ships with this service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Third-party content-generation API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier passed to the generation provider.
    #[serde(default = "default_generation_model")]
    pub model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_generation_model(),
        }
    }
}

fn default_generation_model() -> String {
    "openrouter/auto".to_string()
}
