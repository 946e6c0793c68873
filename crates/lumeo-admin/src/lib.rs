// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin dashboard primitives: pure filtering/search over lead and post
//! collections, CSV export of filtered lead rows, and the credential
//! gate with its session table.

pub mod export;
pub mod filter;
pub mod session;

pub use export::leads_to_csv;
pub use filter::{filter_leads, filter_posts, CategoryFilter, LeadQuery, PostQuery, StatusFilter};
pub use session::{AdminGate, Session, INVALID_CREDENTIALS};
