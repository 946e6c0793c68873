// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lead collection access trait.

use async_trait::async_trait;

use crate::error::LumeoError;
use crate::types::{Lead, LeadId, LeadPatch, NewLead};

/// Access to the lead collection.
///
/// Implemented by the hosted backend client and by the read-only static
/// fallback store. The static store answers mutations with a
/// configuration-remediation error instead of pretending to persist.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// All leads, newest first (descending creation time).
    async fn list(&self) -> Result<Vec<Lead>, LumeoError>;

    /// Creates a lead and returns the stored record including the
    /// server-assigned id and timestamps.
    async fn create(&self, lead: NewLead) -> Result<Lead, LumeoError>;

    /// Merges the patch into the record, stamps a new update timestamp,
    /// and returns the full updated record. Fails with `NotFound` when
    /// the id does not exist.
    async fn update(&self, id: &LeadId, patch: LeadPatch) -> Result<Lead, LumeoError>;

    /// Permanently removes the record. Fails with `NotFound` when absent.
    async fn delete(&self, id: &LeadId) -> Result<(), LumeoError>;
}
