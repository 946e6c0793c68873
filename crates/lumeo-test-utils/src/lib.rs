// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Lumeo integration tests: deterministic record
//! fixtures and mock form sinks.

pub mod fixtures;
pub mod mock_sink;

pub use mock_sink::{FailingSink, RecordingSink};
