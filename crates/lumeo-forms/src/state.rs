// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Submission lifecycle: `Idle → Submitting → {Success, Error}`.
//!
//! `Error → Idle` on the next field edit; any terminal state goes back
//! through `Submitting` on the next attempt. There are no intermediate
//! states and no in-flight lock: preventing double submission is the
//! caller's job (the UI disables its control while `Submitting`).

use tracing::warn;

use lumeo_core::error::LumeoError;

use crate::form::{InquiryForm, InquiryPayload};
use crate::sink::FormSink;

/// Lifecycle state of one inquiry form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Drives a form through validation, delivery, and state transitions.
#[derive(Debug)]
pub struct SubmissionTracker {
    state: SubmissionState,
    /// Shown alongside a transport failure so the visitor has a way to
    /// reach the consultancy anyway.
    fallback_contact: String,
}

impl SubmissionTracker {
    pub fn new(fallback_email: &str, fallback_phone: &str) -> Self {
        Self {
            state: SubmissionState::Idle,
            fallback_contact: format!(
                "We couldn't send your message right now. Reach us directly at {fallback_email} \
                 or {fallback_phone}."
            ),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// A field edit clears a previous error; other states are untouched.
    pub fn edit_field(&mut self) {
        if matches!(self.state, SubmissionState::Error(_)) {
            self.state = SubmissionState::Idle;
        }
    }

    /// Validates, delivers, and transitions. On confirmed success the
    /// form fields are cleared; on any failure they are retained so the
    /// visitor can retry without retyping.
    ///
    /// Resubmission is possible from any terminal state and is not
    /// deduplicated downstream.
    pub async fn submit<S: FormSink + ?Sized>(
        &mut self,
        sink: &S,
        form: &mut InquiryForm,
        source_tag: &str,
    ) -> Result<InquiryPayload, LumeoError> {
        // Validation failure goes straight to Error; no network call.
        let payload = match form.normalize(source_tag) {
            Ok(payload) => payload,
            Err(err) => {
                self.state = SubmissionState::Error(err.to_string());
                return Err(err);
            }
        };

        self.state = SubmissionState::Submitting;

        match sink.deliver(&payload).await {
            Ok(()) => {
                form.clear();
                self.state = SubmissionState::Success;
                Ok(payload)
            }
            Err(err) => {
                warn!(error = %err, "inquiry delivery failed");
                let message = match &err {
                    // Configuration and transport failures both degrade
                    // to the direct contact channels.
                    LumeoError::Config(_) | LumeoError::Network { .. } => {
                        self.fallback_contact.clone()
                    }
                    other => other.to_string(),
                };
                self.state = SubmissionState::Error(message);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSink {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSink {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FormSink for CountingSink {
        async fn deliver(&self, _payload: &InquiryPayload) -> Result<(), LumeoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(LumeoError::Network {
                    message: "connection refused".into(),
                    source: None,
                })
            } else {
                Ok(())
            }
        }
    }

    fn filled_form() -> InquiryForm {
        InquiryForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: "".into(),
            phone: "".into(),
            service: "web_development".into(),
            budget: "".into(),
            message: "We need a new storefront built this quarter.".into(),
        }
    }

    fn tracker() -> SubmissionTracker {
        SubmissionTracker::new("hello@lumeo.agency", "+1 (555) 014-0923")
    }

    #[tokio::test]
    async fn starts_idle() {
        assert_eq!(*tracker().state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn validation_failure_never_reaches_the_sink() {
        let sink = CountingSink::ok();
        let mut t = tracker();
        let mut form = InquiryForm::default();

        let err = t.submit(&sink, &mut form, "Contact Form").await.unwrap_err();
        assert!(matches!(err, LumeoError::Validation { .. }));
        assert_eq!(sink.count(), 0, "no network call may happen");
        match t.state() {
            SubmissionState::Error(msg) => {
                assert!(msg.contains("name"), "got: {msg}");
                assert!(msg.contains("message"), "got: {msg}");
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[tokio::test]
    async fn validation_failure_retains_fields() {
        let sink = CountingSink::ok();
        let mut t = tracker();
        let mut form = InquiryForm {
            name: "Jane".into(),
            ..Default::default()
        };
        let _ = t.submit(&sink, &mut form, "Contact Form").await;
        assert_eq!(form.name, "Jane", "fields are cleared only on success");
    }

    #[tokio::test]
    async fn successful_submission_clears_the_form() {
        let sink = CountingSink::ok();
        let mut t = tracker();
        let mut form = filled_form();

        let payload = t.submit(&sink, &mut form, "Contact Form").await.unwrap();
        assert_eq!(*t.state(), SubmissionState::Success);
        assert_eq!(sink.count(), 1);
        assert!(form.name.is_empty());
        assert_eq!(payload.source, "Contact Form");
    }

    #[tokio::test]
    async fn transport_failure_offers_fallback_contacts() {
        let sink = CountingSink::failing();
        let mut t = tracker();
        let mut form = filled_form();

        let err = t.submit(&sink, &mut form, "Contact Form").await.unwrap_err();
        assert!(matches!(err, LumeoError::Network { .. }));
        match t.state() {
            SubmissionState::Error(msg) => {
                assert!(msg.contains("hello@lumeo.agency"), "got: {msg}");
                assert!(msg.contains("+1 (555) 014-0923"), "got: {msg}");
            }
            other => panic!("unexpected state: {other:?}"),
        }
        assert_eq!(form.name, "Jane Doe", "fields retained on failure");
    }

    #[tokio::test]
    async fn edit_after_error_returns_to_idle() {
        let sink = CountingSink::failing();
        let mut t = tracker();
        let mut form = filled_form();
        let _ = t.submit(&sink, &mut form, "Contact Form").await;
        assert!(matches!(t.state(), SubmissionState::Error(_)));

        t.edit_field();
        assert_eq!(*t.state(), SubmissionState::Idle);

        // Editing in other states changes nothing.
        t.edit_field();
        assert_eq!(*t.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn resubmission_after_failure_is_possible_and_not_deduplicated() {
        let sink = CountingSink::ok();
        let mut t = tracker();

        let mut form = filled_form();
        t.submit(&sink, &mut form, "Contact Form").await.unwrap();

        let mut form = filled_form();
        t.submit(&sink, &mut form, "Contact Form").await.unwrap();

        assert_eq!(sink.count(), 2, "duplicates are delivered downstream");
        assert_eq!(*t.state(), SubmissionState::Success);
    }
}
