// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client for the hosted backend data API.
//!
//! Provides [`BackendSettings`] (the configuration gate), the low-level
//! [`BackendClient`], and typed handles on the two collections the
//! platform owns remotely: `leads` and `blog_posts`. Both handles
//! implement the store traits from `lumeo-core`, so the serving layer
//! swaps between live data and the static fallback without caring.
//!
//! Failure policy: nothing here retries. Every failure surfaces
//! synchronously as a typed error and the operator decides what to do.

pub mod client;
pub mod leads;
pub mod posts;
pub mod settings;

pub use client::BackendClient;
pub use leads::LeadCollection;
pub use posts::PostCollection;
pub use settings::BackendSettings;
