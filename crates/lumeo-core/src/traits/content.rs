// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Blog content access trait.

use async_trait::async_trait;

use crate::error::LumeoError;
use crate::types::{BlogPost, PostId};

/// Read access to the blog post collection, plus the one dedicated
/// mutation reads are allowed to trigger: the views counter.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All posts including drafts, newest publish date first.
    async fn list_all(&self) -> Result<Vec<BlogPost>, LumeoError>;

    /// Published posts only, newest publish date first.
    async fn list_published(&self) -> Result<Vec<BlogPost>, LumeoError>;

    /// Looks up a post by slug. `Ok(None)` on miss for every
    /// implementation; only genuine failures (ambiguity, transport)
    /// surface as errors.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, LumeoError>;

    /// Increments the post's view counter by exactly one and returns the
    /// new value. The static fallback store exposes no counter and
    /// answers with a configuration error.
    async fn increment_views(&self, id: &PostId) -> Result<u64, LumeoError>;
}
