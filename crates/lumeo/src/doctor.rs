// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lumeo doctor` command implementation.
//!
//! Runs diagnostic checks against the Lumeo configuration and the
//! external integrations it names, so an operator can see in one table
//! why the service is (or is not) running in fallback mode.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use lumeo_backend::BackendSettings;
use lumeo_config::model::LumeoConfig;
use lumeo_core::error::LumeoError;

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning (feature degraded, not broken).
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

/// Run the `lumeo doctor` command. With `--plain`, disables colored
/// output.
pub async fn run_doctor(config: &LumeoConfig, plain: bool) -> Result<(), LumeoError> {
    let use_color = !plain && std::io::stdout().is_terminal();

    let results = vec![
        check_config().await,
        check_backend(config).await,
        check_form_endpoint(config),
        check_admin_gate(config),
        check_generation(config),
    ];

    println!();
    println!("  lumeo doctor");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    let mut warn_count = 0;

    for result in &results {
        let duration_ms = result.duration.as_millis();
        let line = match result.status {
            CheckStatus::Pass => {
                if use_color {
                    use colored::Colorize;
                    format!(
                        "    {} {:<18} {} ({duration_ms}ms)",
                        "✓".green(),
                        result.name,
                        result.message
                    )
                } else {
                    format!(
                        "    [OK]   {:<18} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
            CheckStatus::Warn => {
                warn_count += 1;
                if use_color {
                    use colored::Colorize;
                    format!(
                        "    {} {:<18} {} ({duration_ms}ms)",
                        "!".yellow(),
                        result.name,
                        result.message.yellow()
                    )
                } else {
                    format!(
                        "    [WARN] {:<18} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
            CheckStatus::Fail => {
                fail_count += 1;
                if use_color {
                    use colored::Colorize;
                    format!(
                        "    {} {:<18} {} ({duration_ms}ms)",
                        "✗".red(),
                        result.name,
                        result.message.red()
                    )
                } else {
                    format!(
                        "    [FAIL] {:<18} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
        };
        println!("{line}");
    }

    println!();
    if fail_count > 0 || warn_count > 0 {
        let issues = fail_count + warn_count;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }
    println!();

    Ok(())
}

/// Check configuration loads without errors.
async fn check_config() -> CheckResult {
    let start = Instant::now();
    match lumeo_config::load_and_validate() {
        Ok(_) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Pass,
            message: "valid".to_string(),
            duration: start.elapsed(),
        },
        Err(errors) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Fail,
            message: format!("{} error(s)", errors.len()),
            duration: start.elapsed(),
        },
    }
}

/// Check the hosted backend: either correctly unconfigured (fallback
/// mode) or configured and reachable.
async fn check_backend(config: &LumeoConfig) -> CheckResult {
    let start = Instant::now();
    let settings = BackendSettings::from_config(&config.backend);

    let client = match settings.client() {
        Ok(client) => client,
        Err(reason) => {
            return CheckResult {
                name: "Backend".to_string(),
                status: CheckStatus::Warn,
                message: format!("not configured ({reason}); static demo data active"),
                duration: start.elapsed(),
            };
        }
    };

    match client.leads().list().await {
        Ok(leads) => CheckResult {
            name: "Backend".to_string(),
            status: CheckStatus::Pass,
            message: format!("reachable, {} lead(s)", leads.len()),
            duration: start.elapsed(),
        },
        Err(e) => CheckResult {
            name: "Backend".to_string(),
            status: CheckStatus::Fail,
            message: e.to_string(),
            duration: start.elapsed(),
        },
    }
}

/// Check the form-processing endpoint is present and well-formed.
fn check_form_endpoint(config: &LumeoConfig) -> CheckResult {
    let start = Instant::now();
    match config.forms.endpoint.as_deref() {
        None => CheckResult {
            name: "Form endpoint".to_string(),
            status: CheckStatus::Warn,
            message: "not set; inquiries will offer the fallback contact channels".to_string(),
            duration: start.elapsed(),
        },
        Some(endpoint) => match url::Url::parse(endpoint) {
            Ok(_) => CheckResult {
                name: "Form endpoint".to_string(),
                status: CheckStatus::Pass,
                message: "configured".to_string(),
                duration: start.elapsed(),
            },
            Err(e) => CheckResult {
                name: "Form endpoint".to_string(),
                status: CheckStatus::Fail,
                message: format!("invalid URL: {e}"),
                duration: start.elapsed(),
            },
        },
    }
}

/// Check the admin gate has a usable credential hash.
fn check_admin_gate(config: &LumeoConfig) -> CheckResult {
    let start = Instant::now();
    match config.admin.password_hash.as_deref() {
        None => CheckResult {
            name: "Admin gate".to_string(),
            status: CheckStatus::Warn,
            message: "admin.password_hash not set; dashboard logins disabled (run `lumeo \
                      hash-password`)"
                .to_string(),
            duration: start.elapsed(),
        },
        Some(_) => CheckResult {
            name: "Admin gate".to_string(),
            status: CheckStatus::Pass,
            message: format!("configured for `{}`", config.admin.username),
            duration: start.elapsed(),
        },
    }
}

/// Check the content-generation key (the feature itself does not ship;
/// the admin dashboard shows a disabled placeholder without it).
fn check_generation(config: &LumeoConfig) -> CheckResult {
    let start = Instant::now();
    match config.generation.api_key.as_deref() {
        None => CheckResult {
            name: "Generation key".to_string(),
            status: CheckStatus::Warn,
            message: "not set; AI-assisted content generation unavailable".to_string(),
            duration: start.elapsed(),
        },
        Some(_) => CheckResult {
            name: "Generation key".to_string(),
            status: CheckStatus::Pass,
            message: format!("present (model: {})", config.generation.model),
            duration: start.elapsed(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_result_has_required_fields() {
        let result = CheckResult {
            name: "test".to_string(),
            status: CheckStatus::Pass,
            message: "ok".to_string(),
            duration: Duration::from_millis(5),
        };
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.duration.as_millis(), 5);
    }

    #[tokio::test]
    async fn unconfigured_backend_warns_not_fails() {
        let config = LumeoConfig::default();
        let result = check_backend(&config).await;
        assert_eq!(result.status, CheckStatus::Warn);
        assert!(result.message.contains("static demo data"));
    }

    #[test]
    fn missing_form_endpoint_warns() {
        let config = LumeoConfig::default();
        let result = check_form_endpoint(&config);
        assert_eq!(result.status, CheckStatus::Warn);
    }

    #[test]
    fn missing_admin_hash_points_at_the_remedy() {
        let config = LumeoConfig::default();
        let result = check_admin_gate(&config);
        assert_eq!(result.status, CheckStatus::Warn);
        assert!(result.message.contains("hash-password"));
    }

    #[test]
    fn present_generation_key_passes() {
        let mut config = LumeoConfig::default();
        config.generation.api_key = Some("or-demo".into());
        let result = check_generation(&config);
        assert_eq!(result.status, CheckStatus::Pass);
    }
}
