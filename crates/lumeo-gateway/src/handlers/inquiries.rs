// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Public inquiry submission.
//!
//! Flow: validate and normalize the raw form, deliver to the form sink
//! (fire-and-forget), then record the lead in the active store when the
//! live backend is configured. Sink delivery is the acceptance signal;
//! a failed lead insert degrades to a warning rather than failing a
//! submission the destination already received.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use lumeo_core::error::LumeoError;
use lumeo_forms::{InquiryForm, SubmissionState, SubmissionTracker};

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for an accepted inquiry.
#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub message: String,
}

/// Confirmation shown on acceptance, with the response-time commitment.
const CONFIRMATION: &str =
    "Thanks for reaching out! We'll get back to you within one business day.";

/// POST /v1/inquiries
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(mut form): Json<InquiryForm>,
) -> Result<(StatusCode, Json<InquiryResponse>), ApiError> {
    let mut tracker =
        SubmissionTracker::new(&state.forms.fallback_email, &state.forms.fallback_phone);

    // Validation comes first: a bad form is the visitor's problem to fix
    // regardless of whether delivery is configured.
    form.validate()?;

    let Some(sink) = state.sink.as_deref() else {
        // No delivery endpoint configured: degrade to the direct
        // contact channels instead of silently dropping the inquiry.
        return Err(ApiError(LumeoError::Config(format!(
            "inquiry delivery is not configured. Reach us directly at {} or {}.",
            state.forms.fallback_email, state.forms.fallback_phone
        ))));
    };

    match tracker
        .submit(sink, &mut form, &state.forms.source_tag)
        .await
    {
        Ok(payload) => {
            if state.features.backend_configured {
                if let Err(err) = state.leads.create(payload.to_new_lead()).await {
                    warn!(error = %err, "inquiry delivered but lead record was not created");
                }
            }
            Ok((
                StatusCode::ACCEPTED,
                Json(InquiryResponse {
                    message: CONFIRMATION.to_string(),
                }),
            ))
        }
        Err(err @ LumeoError::Validation { .. }) => Err(ApiError(err)),
        Err(err) => {
            // The tracker already composed the user-facing degradation
            // message (fallback contact channels).
            let message = match tracker.state() {
                SubmissionState::Error(message) => message.clone(),
                _ => err.to_string(),
            };
            Err(ApiError(LumeoError::Network {
                message,
                source: None,
            }))
        }
    }
}
