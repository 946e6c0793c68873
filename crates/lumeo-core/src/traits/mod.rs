// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store traits at the seam between the live backend and the static
//! fallback dataset. Both sources implement the same contracts so the
//! serving layer never knows which one is active.

pub mod content;
pub mod leads;

pub use content::ContentStore;
pub use leads::LeadStore;
