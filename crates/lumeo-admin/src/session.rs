// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin session gate.
//!
//! Verifies the operator's password against an Argon2id PHC hash from
//! configuration (the comparison inside argon2 is constant-time) and
//! mints opaque random session tokens. An unknown username still runs a
//! verification against the stored hash so both failure paths cost the
//! same, and every failure returns the same generic message — account
//! names are not enumerable through this gate.
//!
//! No expiry is enforced here; sessions live until logout or process
//! restart.

use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rand::RngCore;
use serde::Serialize;
use tracing::warn;

use lumeo_config::model::AdminConfig;
use lumeo_core::error::LumeoError;

/// The one message every authentication failure returns.
pub const INVALID_CREDENTIALS: &str = "invalid username or password";

/// An authenticated admin session.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Credential gate and session table for the admin surface.
pub struct AdminGate {
    username: String,
    password_hash: Option<String>,
    sessions: DashMap<String, Session>,
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("username", &self.username)
            .field(
                "password_hash",
                &self.password_hash.as_ref().map(|_| "[redacted]"),
            )
            .field("sessions", &self.sessions.len())
            .finish()
    }
}

impl AdminGate {
    pub fn from_config(config: &AdminConfig) -> Self {
        Self {
            username: config.username.clone(),
            password_hash: config.password_hash.clone(),
            sessions: DashMap::new(),
        }
    }

    /// True when an admin hash is configured and logins can succeed.
    pub fn is_configured(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Verifies the credentials and mints a session on success.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Session, LumeoError> {
        let Some(hash) = self.password_hash.as_deref() else {
            warn!("admin login attempted but admin.password_hash is not configured");
            return Err(LumeoError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "configured admin.password_hash is not a valid PHC string");
                return Err(LumeoError::Unauthorized(INVALID_CREDENTIALS.to_string()));
            }
        };

        // Verify before checking the username so a wrong name costs the
        // same as a wrong password.
        let password_ok = Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok();
        let username_ok = username == self.username;

        if !(password_ok && username_ok) {
            return Err(LumeoError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let session = Session {
            token: random_token(),
            username: self.username.clone(),
            role: "admin".to_string(),
            created_at: Utc::now(),
        };
        self.sessions
            .insert(session.token.clone(), session.clone());
        Ok(session)
    }

    /// Looks up a session by token.
    pub fn verify(&self, token: &str) -> Option<Session> {
        self.sessions.get(token).map(|entry| entry.clone())
    }

    /// Removes the session. Logging out twice has the same effect as
    /// once.
    pub fn logout(&self, token: &str) {
        self.sessions.remove(token);
    }
}

/// 32 random bytes, hex-encoded.
fn random_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    fn gate(password: &str) -> AdminGate {
        AdminGate::from_config(&AdminConfig {
            username: "admin".into(),
            password_hash: Some(hash(password)),
        })
    }

    #[test]
    fn valid_credentials_mint_a_verifiable_session() {
        let gate = gate("correct horse battery staple");
        let session = gate
            .authenticate("admin", "correct horse battery staple")
            .unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(session.role, "admin");
        assert_eq!(session.token.len(), 64);

        let found = gate.verify(&session.token).expect("session exists");
        assert_eq!(found.username, "admin");
    }

    #[test]
    fn wrong_password_and_unknown_user_return_the_same_message() {
        let gate = gate("correct horse battery staple");

        let wrong_password = gate.authenticate("admin", "wrong").unwrap_err();
        let unknown_user = gate
            .authenticate("root", "correct horse battery staple")
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert!(wrong_password.to_string().contains(INVALID_CREDENTIALS));
    }

    #[test]
    fn unconfigured_gate_rejects_with_the_generic_message() {
        let gate = AdminGate::from_config(&AdminConfig {
            username: "admin".into(),
            password_hash: None,
        });
        assert!(!gate.is_configured());
        let err = gate.authenticate("admin", "anything").unwrap_err();
        assert!(err.to_string().contains(INVALID_CREDENTIALS));
    }

    #[test]
    fn logout_is_idempotent() {
        let gate = gate("correct horse battery staple");
        let session = gate
            .authenticate("admin", "correct horse battery staple")
            .unwrap();

        gate.logout(&session.token);
        assert!(gate.verify(&session.token).is_none());
        // Second logout: same effect as the first.
        gate.logout(&session.token);
        assert!(gate.verify(&session.token).is_none());
    }

    #[test]
    fn each_login_mints_a_distinct_token() {
        let gate = gate("correct horse battery staple");
        let a = gate
            .authenticate("admin", "correct horse battery staple")
            .unwrap();
        let b = gate
            .authenticate("admin", "correct horse battery staple")
            .unwrap();
        assert_ne!(a.token, b.token);
        assert!(gate.verify(&a.token).is_some());
        assert!(gate.verify(&b.token).is_some());
    }

    #[test]
    fn garbage_token_does_not_verify() {
        let gate = gate("correct horse battery staple");
        assert!(gate.verify("not-a-token").is_none());
    }

    #[test]
    fn debug_redacts_the_hash() {
        let gate = gate("correct horse battery staple");
        let debug = format!("{gate:?}");
        assert!(!debug.contains("$argon2"));
        assert!(debug.contains("[redacted]"));
    }
}
