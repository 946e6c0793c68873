// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Lumeo platform.
//!
//! This crate provides the error taxonomy, domain record types, and the
//! store traits shared by the live backend client and the static
//! fallback dataset. Everything else in the workspace builds on these.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{BackendErrorKind, LumeoError};
pub use traits::{ContentStore, LeadStore};
pub use types::{
    BlogCategory, BlogPost, BudgetRange, Lead, LeadId, LeadPatch, LeadStatus, NewLead, NewPost,
    PostId, PostPatch, ServiceOffering, Slug,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_taxonomy_is_constructible() {
        let _config = LumeoError::Config("test".into());
        let _backend = LumeoError::Backend {
            kind: BackendErrorKind::Other,
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _validation = LumeoError::Validation {
            fields: vec!["name".into()],
        };
        let _network = LumeoError::Network {
            message: "test".into(),
            source: None,
        };
        let _not_found = LumeoError::NotFound {
            entity: "lead",
            key: "x".into(),
        };
        let _unauthorized = LumeoError::Unauthorized("test".into());
        let _internal = LumeoError::Internal("test".into());
    }

    #[test]
    fn store_traits_are_object_safe() {
        // Both stores are held as trait objects by the serving layer.
        fn _lead_store(_: &dyn LeadStore) {}
        fn _content_store(_: &dyn ContentStore) {}
    }
}
