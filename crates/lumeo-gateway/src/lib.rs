// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP API surface for the Lumeo platform.
//!
//! Public routes: inquiry submission, published blog reads, the
//! dedicated view-increment operation, health. Admin routes (bearer
//! session token): lead triage with search/status filtering, CSV
//! export of the filtered rows, the full post list, and the
//! integration status report.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use server::{build_router, start_server};
pub use state::{AppState, FeatureStatus};
