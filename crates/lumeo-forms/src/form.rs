// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw inquiry form fields, validation, and the single normalization
//! step at the system boundary.
//!
//! Everything arrives as strings (that is what a form posts); one
//! `normalize` call turns blanks into proper option types and parses
//! the enumerated fields. Nothing downstream ever coalesces blank
//! strings again.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use lumeo_core::error::LumeoError;
use lumeo_core::types::{BudgetRange, LeadStatus, NewLead, ServiceOffering};

/// Basic `local@domain` shape. Deliverability is the mail system's
/// problem, not the form's.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Shortest message accepted by the inquiry form.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Raw inquiry form field values as submitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InquiryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub message: String,
}

impl InquiryForm {
    /// Checks the required fields (name, email, service, message) and
    /// the enumerated values. Returns every offending field at once so
    /// the visitor fixes the form in one pass.
    pub fn validate(&self) -> Result<(), LumeoError> {
        let mut fields = Vec::new();

        if self.name.trim().is_empty() {
            fields.push("name".to_string());
        }
        if self.email.trim().is_empty() || !EMAIL.is_match(self.email.trim()) {
            fields.push("email".to_string());
        }
        if self.service.trim().is_empty()
            || ServiceOffering::from_str(self.service.trim()).is_err()
        {
            fields.push("service".to_string());
        }
        if self.message.trim().len() < MIN_MESSAGE_LEN {
            fields.push("message".to_string());
        }
        if !self.budget.trim().is_empty() && BudgetRange::from_str(self.budget.trim()).is_err() {
            fields.push("budget".to_string());
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(LumeoError::Validation { fields })
        }
    }

    /// The single boundary normalization step: validate, trim, coalesce
    /// blank optionals to `None`, parse enums, stamp the submission
    /// timestamp and provenance tag.
    pub fn normalize(&self, source_tag: &str) -> Result<InquiryPayload, LumeoError> {
        self.validate()?;

        let optional = |value: &str| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        // Parses cannot fail past validate(), but the error path is kept
        // honest rather than unwrapped.
        let service = ServiceOffering::from_str(self.service.trim()).map_err(|_| {
            LumeoError::Validation {
                fields: vec!["service".to_string()],
            }
        })?;
        let budget = match optional(&self.budget) {
            Some(raw) => Some(BudgetRange::from_str(&raw).map_err(|_| LumeoError::Validation {
                fields: vec!["budget".to_string()],
            })?),
            None => None,
        };

        Ok(InquiryPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: optional(&self.company),
            phone: optional(&self.phone),
            service,
            budget,
            message: self.message.trim().to_string(),
            timestamp: Utc::now(),
            source: source_tag.to_string(),
        })
    }

    /// Blanks every field. Called only after a confirmed success.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Normalized submission, ready for delivery and lead creation.
#[derive(Debug, Clone, Serialize)]
pub struct InquiryPayload {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: ServiceOffering,
    pub budget: Option<BudgetRange>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

impl InquiryPayload {
    /// The lead record to insert on submission acceptance.
    pub fn to_new_lead(&self) -> NewLead {
        NewLead {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            phone: self.phone.clone(),
            service: self.service,
            budget: self.budget,
            message: self.message.clone(),
            status: LeadStatus::New,
            source: self.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> InquiryForm {
        InquiryForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: "  Example Co  ".into(),
            phone: "".into(),
            service: "web_development".into(),
            budget: "under_10k".into(),
            message: "We need a new storefront built this quarter.".into(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn missing_required_fields_are_all_named() {
        let form = InquiryForm {
            email: "not-an-email".into(),
            ..Default::default()
        };
        let err = form.validate().unwrap_err();
        match err {
            LumeoError::Validation { fields } => {
                assert_eq!(fields, vec!["name", "email", "service", "message"]);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn email_must_have_local_at_domain_shape() {
        for bad in ["jane", "jane@", "@example.com", "jane@example", "a b@c.d"] {
            let form = InquiryForm {
                email: bad.into(),
                ..filled_form()
            };
            let err = form.validate().unwrap_err();
            match err {
                LumeoError::Validation { fields } => {
                    assert!(fields.contains(&"email".to_string()), "accepted: {bad}")
                }
                other => panic!("unexpected variant: {other:?}"),
            }
        }
    }

    #[test]
    fn short_message_is_rejected() {
        let form = InquiryForm {
            message: "too short".into(),
            ..filled_form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn unknown_budget_value_is_rejected_but_blank_is_fine() {
        let mut form = filled_form();
        form.budget = "a-zillion".into();
        assert!(form.validate().is_err());
        form.budget = "".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn normalize_trims_and_coalesces_blanks() {
        let payload = filled_form().normalize("Contact Form").unwrap();
        assert_eq!(payload.company.as_deref(), Some("Example Co"));
        assert!(payload.phone.is_none());
        assert_eq!(payload.budget, Some(BudgetRange::Under10k));
        assert_eq!(payload.source, "Contact Form");
    }

    #[test]
    fn normalized_payload_becomes_a_new_lead() {
        let payload = filled_form().normalize("Contact Form").unwrap();
        let lead = payload.to_new_lead();
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.source, "Contact Form");
        assert_eq!(lead.email, "jane@example.com");
    }

    #[test]
    fn clear_blanks_every_field() {
        let mut form = filled_form();
        form.clear();
        assert!(form.name.is_empty());
        assert!(form.message.is_empty());
    }
}
