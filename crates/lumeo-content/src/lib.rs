// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static fallback content for the Lumeo platform.
//!
//! Provides the deterministic demo datasets, the read-only store over
//! them, and the markdown-lite renderer applied to post bodies at read
//! time.

pub mod demo;
pub mod render;
pub mod store;

pub use render::render_markdown_lite;
pub use store::StaticStore;
