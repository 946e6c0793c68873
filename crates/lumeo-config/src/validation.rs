// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates structural constraints that cannot be expressed via serde
//! attributes: parseable URLs, known log levels, a plausible PHC hash.
//! Semantic "is the backend configured" checks belong to the backend
//! client, not here — a placeholder base URL must not prevent startup,
//! it only keeps the service in fallback mode.

use crate::diagnostic::ConfigError;
use crate::model::LumeoConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for structural correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &LumeoConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let addr = config.server.host.trim();
        let is_valid_ip = addr.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = addr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{addr}` is not a valid IP address or hostname"),
            });
        }
    }

    if !LOG_LEVELS.contains(&config.server.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "server.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.server.log_level
            ),
        });
    }

    if let Some(base_url) = &config.backend.base_url {
        if url::Url::parse(base_url).is_err() {
            errors.push(ConfigError::Validation {
                message: format!("backend.base_url `{base_url}` is not a valid URL"),
            });
        }
    }

    if let Some(endpoint) = &config.forms.endpoint {
        if url::Url::parse(endpoint).is_err() {
            errors.push(ConfigError::Validation {
                message: format!("forms.endpoint `{endpoint}` is not a valid URL"),
            });
        }
    }

    if config.admin.username.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "admin.username must not be empty".to_string(),
        });
    }

    if let Some(hash) = &config.admin.password_hash {
        if !hash.starts_with("$argon2") {
            errors.push(ConfigError::Validation {
                message: "admin.password_hash must be an Argon2 PHC string (starts with `$argon2`)"
                    .to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
