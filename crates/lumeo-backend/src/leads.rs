// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operations on the hosted `leads` collection.

use async_trait::async_trait;
use chrono::Utc;

use lumeo_core::error::LumeoError;
use lumeo_core::traits::LeadStore;
use lumeo_core::types::{Lead, LeadId, LeadPatch, NewLead};

use crate::client::{error_from_response, transport_error, BackendClient};

const COLLECTION: &str = "leads";

/// Typed handle on the remote `leads` collection.
#[derive(Debug, Clone)]
pub struct LeadCollection {
    client: BackendClient,
}

impl LeadCollection {
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// All leads, newest first.
    pub async fn list(&self) -> Result<Vec<Lead>, LumeoError> {
        let response = self
            .client
            .http()
            .get(self.client.collection_url(COLLECTION))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(transport_error)?;
        self.client.rows(COLLECTION, response).await
    }

    /// Inserts a lead and returns the stored record. Field presence is
    /// enforced by the remote layer; this client only passes through.
    pub async fn create(&self, lead: NewLead) -> Result<Lead, LumeoError> {
        let response = self
            .client
            .http()
            .post(self.client.collection_url(COLLECTION))
            .header("Prefer", "return=representation")
            .json(&lead)
            .send()
            .await
            .map_err(transport_error)?;
        let rows: Vec<Lead> = self.client.rows(COLLECTION, response).await?;
        rows.into_iter().next().ok_or_else(|| {
            LumeoError::backend("backend accepted the insert but returned no representation")
        })
    }

    /// Merges the patch, stamps `updated_at`, returns the updated record.
    pub async fn update(&self, id: &LeadId, patch: LeadPatch) -> Result<Lead, LumeoError> {
        let mut body = serde_json::to_value(&patch).map_err(|e| {
            LumeoError::Internal(format!("failed to serialize lead patch: {e}"))
        })?;
        body["updated_at"] = serde_json::json!(Utc::now());

        let response = self
            .client
            .http()
            .patch(self.client.collection_url(COLLECTION))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        let rows: Vec<Lead> = self.client.rows(COLLECTION, response).await?;
        rows.into_iter().next().ok_or_else(|| LumeoError::NotFound {
            entity: "lead",
            key: id.to_string(),
        })
    }

    /// Permanently removes the lead. Fails with `NotFound` when the id
    /// matches nothing.
    pub async fn delete(&self, id: &LeadId) -> Result<(), LumeoError> {
        let response = self
            .client
            .http()
            .delete(self.client.collection_url(COLLECTION))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(COLLECTION, response).await);
        }
        let rows: Vec<serde_json::Value> =
            response.json().await.map_err(|e| LumeoError::Network {
                message: format!("failed to read backend response body: {e}"),
                source: Some(Box::new(e)),
            })?;
        if rows.is_empty() {
            return Err(LumeoError::NotFound {
                entity: "lead",
                key: id.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl LeadStore for LeadCollection {
    async fn list(&self) -> Result<Vec<Lead>, LumeoError> {
        LeadCollection::list(self).await
    }

    async fn create(&self, lead: NewLead) -> Result<Lead, LumeoError> {
        LeadCollection::create(self, lead).await
    }

    async fn update(&self, id: &LeadId, patch: LeadPatch) -> Result<Lead, LumeoError> {
        LeadCollection::update(self, id, patch).await
    }

    async fn delete(&self, id: &LeadId) -> Result<(), LumeoError> {
        LeadCollection::delete(self, id).await
    }
}
