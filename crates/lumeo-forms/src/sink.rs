// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delivery of normalized inquiries to the external form-processing
//! endpoint.
//!
//! The destination is cross-origin and does not return a readable
//! response, so the contract is explicit: success means "no
//! transport-level error". Application-level rejections at the
//! destination are invisible and indistinguishable from success. The
//! trait exists so a future same-origin sink with a readable response
//! can upgrade to true acknowledgment without changing callers.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use lumeo_config::model::FormsConfig;
use lumeo_core::error::LumeoError;

use crate::form::InquiryPayload;

/// Sink timeout. A hung request must not leave a submission in
/// `Submitting` forever.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(15);

/// Destination for normalized inquiry payloads.
#[async_trait]
pub trait FormSink: Send + Sync {
    /// Delivers a payload. `Ok(())` means the request was dispatched and
    /// the transport did not fail; it does not mean the destination
    /// accepted the data.
    async fn deliver(&self, payload: &InquiryPayload) -> Result<(), LumeoError>;
}

/// Production sink: multipart POST to the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpFormSink {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpFormSink {
    /// Builds the sink from configuration; a missing endpoint is a
    /// configuration error so the caller can surface the fallback
    /// contact channels instead.
    pub fn from_config(config: &FormsConfig) -> Result<Self, LumeoError> {
        let endpoint = config
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                LumeoError::Config(
                    "forms.endpoint is not set; add it to lumeo.toml (or LUMEO_FORMS_ENDPOINT) to \
                     enable inquiry delivery"
                        .to_string(),
                )
            })?;
        Self::new(endpoint)
    }

    pub fn new(endpoint: &str) -> Result<Self, LumeoError> {
        let http = reqwest::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()
            .map_err(|e| LumeoError::Network {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            http,
        })
    }
}

#[async_trait]
impl FormSink for HttpFormSink {
    async fn deliver(&self, payload: &InquiryPayload) -> Result<(), LumeoError> {
        // The destination expects every field present; absent optionals
        // go out as empty strings at this outermost boundary.
        let form = reqwest::multipart::Form::new()
            .text("name", payload.name.clone())
            .text("email", payload.email.clone())
            .text("company", payload.company.clone().unwrap_or_default())
            .text("phone", payload.phone.clone().unwrap_or_default())
            .text("service", payload.service.to_string())
            .text(
                "budget",
                payload.budget.map(|b| b.to_string()).unwrap_or_default(),
            )
            .text("message", payload.message.clone())
            .text("timestamp", payload.timestamp.to_rfc3339())
            .text("source", payload.source.clone());

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| LumeoError::Network {
                message: format!("inquiry delivery failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        // Deliberately not inspected beyond logging: the fire-and-forget
        // contract treats any dispatched request as delivered.
        debug!(status = %response.status(), "inquiry dispatched to form endpoint");
        Ok(())
    }
}
