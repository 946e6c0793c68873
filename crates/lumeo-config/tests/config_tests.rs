// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the configuration system: layered loading,
//! strict key checking, and validation behavior a deployment would hit.

use lumeo_config::{load_and_validate_str, ConfigError};

#[test]
fn empty_config_uses_defaults_and_validates() {
    let config = load_and_validate_str("").unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.log_level, "info");
    assert!(config.backend.base_url.is_none());
    assert!(config.forms.endpoint.is_none());
    assert!(config.admin.password_hash.is_none());
    assert!(config.generation.api_key.is_none());
}

#[test]
fn full_config_round_trips() {
    let toml_str = r#"
[server]
host = "0.0.0.0"
port = 3000
log_level = "debug"

[backend]
base_url = "https://abcdefgh.lumeo-data.io"
service_key = "eyJhbGciOiJIUzI1NiJ9.demo"

[forms]
endpoint = "https://forms.example.com/api/submit"
source_tag = "Website"

[admin]
username = "ops"
password_hash = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$GpZ3sK/oH9p7VIiV56G1Nc6HkyOrnH0vYFBvb2Jz0fo"

[generation]
api_key = "or-demo-key"
"#;
    let config = load_and_validate_str(toml_str).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.forms.source_tag, "Website");
    assert_eq!(config.admin.username, "ops");
    assert!(config.generation.api_key.is_some());
}

#[test]
fn typo_in_section_key_yields_suggestion() {
    let errors = load_and_validate_str("[forms]\nendpont = \"https://x.example.com\"\n")
        .expect_err("typo must be rejected");
    let unknown = errors
        .iter()
        .find_map(|e| match e {
            ConfigError::UnknownKey { key, suggestion, .. } => {
                Some((key.clone(), suggestion.clone()))
            }
            _ => None,
        })
        .expect("expected an UnknownKey diagnostic");
    assert_eq!(unknown.0, "endpont");
    assert_eq!(unknown.1.as_deref(), Some("endpoint"));
}

#[test]
fn wrong_type_yields_invalid_type() {
    let errors =
        load_and_validate_str("[server]\nport = \"eight-thousand\"\n").expect_err("must fail");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidType { .. })));
}

#[test]
fn validation_errors_are_collected_not_fail_fast() {
    let toml_str = r#"
[server]
host = ""
log_level = "loud"
"#;
    let errors = load_and_validate_str(toml_str).expect_err("must fail");
    let validation_count = errors
        .iter()
        .filter(|e| matches!(e, ConfigError::Validation { .. }))
        .count();
    assert!(validation_count >= 2, "got {errors:?}");
}

#[test]
fn partial_backend_config_is_not_a_startup_error() {
    // Only the base URL, no key: the service starts in fallback mode.
    let config = load_and_validate_str("[backend]\nbase_url = \"https://x.example.com\"\n").unwrap();
    assert!(config.backend.service_key.is_none());
}
