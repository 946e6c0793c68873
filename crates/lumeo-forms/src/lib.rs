// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inquiry form handling for the Lumeo platform: validation, boundary
//! normalization, the submission state machine, and fire-and-forget
//! delivery to the external form-processing endpoint.

pub mod form;
pub mod sink;
pub mod state;

pub use form::{InquiryForm, InquiryPayload, MIN_MESSAGE_LEN};
pub use sink::{FormSink, HttpFormSink};
pub use state::{SubmissionState, SubmissionTracker};
