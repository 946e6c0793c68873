// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock `FormSink` implementations for exercising the submission flow
//! without a network.

use std::sync::Mutex;

use async_trait::async_trait;
use lumeo_core::error::LumeoError;
use lumeo_forms::{FormSink, InquiryPayload};

/// Records every delivered payload. Used to assert that validation
/// failures cause zero deliveries and successes exactly one.
#[derive(Debug, Default)]
pub struct RecordingSink {
    deliveries: Mutex<Vec<InquiryPayload>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.lock().expect("sink mutex poisoned").len()
    }

    pub fn deliveries(&self) -> Vec<InquiryPayload> {
        self.deliveries.lock().expect("sink mutex poisoned").clone()
    }
}

#[async_trait]
impl FormSink for RecordingSink {
    async fn deliver(&self, payload: &InquiryPayload) -> Result<(), LumeoError> {
        self.deliveries
            .lock()
            .expect("sink mutex poisoned")
            .push(payload.clone());
        Ok(())
    }
}

/// Always fails at the transport level, simulating an unreachable
/// form-processing endpoint.
#[derive(Debug, Default)]
pub struct FailingSink;

#[async_trait]
impl FormSink for FailingSink {
    async fn deliver(&self, _payload: &InquiryPayload) -> Result<(), LumeoError> {
        Err(LumeoError::Network {
            message: "connection refused".into(),
            source: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumeo_forms::InquiryForm;

    fn payload() -> InquiryPayload {
        InquiryForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            service: "web_development".into(),
            message: "We need a new storefront built.".into(),
            ..Default::default()
        }
        .normalize("Contact Form")
        .unwrap()
    }

    #[tokio::test]
    async fn recording_sink_counts_deliveries() {
        let sink = RecordingSink::new();
        assert_eq!(sink.delivery_count(), 0);
        sink.deliver(&payload()).await.unwrap();
        assert_eq!(sink.delivery_count(), 1);
        assert_eq!(sink.deliveries()[0].email, "jane@example.com");
    }

    #[tokio::test]
    async fn failing_sink_fails_at_transport_level() {
        let err = FailingSink.deliver(&payload()).await.unwrap_err();
        assert!(matches!(err, LumeoError::Network { .. }));
    }
}
