// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Lumeo platform.

use thiserror::Error;

/// Distinguishes backend failures the operator can fix by completing setup
/// from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// The remote collection/table does not exist (schema setup incomplete).
    MissingCollection,
    /// Any other remote failure (transient, permission, malformed response).
    Other,
}

/// The primary error type used across all Lumeo crates.
///
/// Mirrors the platform's failure taxonomy: configuration problems are
/// raised before any network attempt, backend and network failures after
/// one, and validation failures never reach the network layer at all.
/// Nothing is retried automatically; every recovery path is a manual
/// operator or visitor action.
#[derive(Debug, Error)]
pub enum LumeoError {
    /// Required configuration absent or malformed. The message is a
    /// remediation instruction, not a stack trace.
    #[error("configuration error: {0}")]
    Config(String),

    /// A remote backend operation was attempted and failed.
    #[error("backend error: {message}")]
    Backend {
        kind: BackendErrorKind,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Client-side form validation failure. Carries the offending field
    /// names so the caller can enumerate them to the visitor.
    #[error("validation error: missing or invalid fields: {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    /// The outbound request itself could not be dispatched or completed
    /// at the transport level.
    #[error("network error: {message}")]
    Network {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A record addressed by id or key does not exist.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// Credential or session verification failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LumeoError {
    /// Shorthand for a backend failure without a distinguishable kind.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            kind: BackendErrorKind::Other,
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for the schema-setup-incomplete backend failure.
    pub fn missing_collection(message: impl Into<String>) -> Self {
        Self::Backend {
            kind: BackendErrorKind::MissingCollection,
            message: message.into(),
            source: None,
        }
    }
}
