// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only static store serving the demo datasets.
//!
//! Active whenever the hosted backend is unconfigured. Mutating trait
//! operations answer with a configuration-remediation error rather than
//! pretending to persist anything.

use async_trait::async_trait;
use lumeo_core::error::LumeoError;
use lumeo_core::traits::{ContentStore, LeadStore};
use lumeo_core::types::{BlogPost, Lead, LeadId, LeadPatch, NewLead, PostId};

use crate::demo;

/// In-memory store over the fixed demo datasets.
#[derive(Debug, Clone)]
pub struct StaticStore {
    leads: Vec<Lead>,
    posts: Vec<BlogPost>,
}

impl StaticStore {
    /// Store seeded with the demo datasets.
    pub fn new() -> Self {
        Self::with_data(demo::demo_leads(), demo::demo_posts())
    }

    /// Store over caller-supplied data (used by tests).
    pub fn with_data(leads: Vec<Lead>, posts: Vec<BlogPost>) -> Self {
        Self { leads, posts }
    }

    /// Published posts only, in dataset order.
    pub fn get_published(&self) -> Vec<BlogPost> {
        self.posts.iter().filter(|p| p.published).cloned().collect()
    }

    /// The full post dataset, unfiltered, in dataset order.
    pub fn get_all(&self) -> Vec<BlogPost> {
        self.posts.clone()
    }

    /// Linear scan for the first post with the given slug; `None` on miss.
    ///
    /// If two records were erroneously given the same slug the
    /// first-encountered one wins, deterministically.
    pub fn get_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.posts.iter().find(|p| p.slug.0 == slug).cloned()
    }

    fn read_only_error(operation: &str) -> LumeoError {
        LumeoError::Config(format!(
            "cannot {operation}: the hosted backend is not configured and the demo dataset is \
             read-only. Set backend.base_url and backend.service_key in lumeo.toml to enable this."
        ))
    }
}

impl Default for StaticStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadStore for StaticStore {
    async fn list(&self) -> Result<Vec<Lead>, LumeoError> {
        let mut leads = self.leads.clone();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(leads)
    }

    async fn create(&self, _lead: NewLead) -> Result<Lead, LumeoError> {
        Err(Self::read_only_error("create a lead"))
    }

    async fn update(&self, _id: &LeadId, _patch: LeadPatch) -> Result<Lead, LumeoError> {
        Err(Self::read_only_error("update a lead"))
    }

    async fn delete(&self, _id: &LeadId) -> Result<(), LumeoError> {
        Err(Self::read_only_error("delete a lead"))
    }
}

#[async_trait]
impl ContentStore for StaticStore {
    async fn list_all(&self) -> Result<Vec<BlogPost>, LumeoError> {
        let mut posts = self.get_all();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts)
    }

    async fn list_published(&self) -> Result<Vec<BlogPost>, LumeoError> {
        let mut posts = self.get_published();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, LumeoError> {
        Ok(StaticStore::get_by_slug(self, slug))
    }

    async fn increment_views(&self, _id: &PostId) -> Result<u64, LumeoError> {
        // The demo dataset exposes no counter; views never change across
        // any read operation.
        Err(Self::read_only_error("increment post views"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumeo_core::types::{BlogCategory, Slug};

    fn post(id: &str, slug: &str, published: bool, views: u64) -> BlogPost {
        use chrono::{TimeZone, Utc};
        BlogPost {
            id: PostId(id.into()),
            slug: Slug(slug.into()),
            title: format!("Post {id}"),
            excerpt: "excerpt".into(),
            content: "content".into(),
            author: "Author".into(),
            category: BlogCategory::WebDevelopment,
            tags: vec![],
            reading_time_minutes: 3,
            published,
            published_at: published.then(|| Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()),
            views,
            seo_title: None,
            seo_description: None,
            ai_generated: false,
            trending_score: 0,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn get_published_filters_drafts() {
        let store = StaticStore::new();
        let published = store.get_published();
        assert!(!published.is_empty());
        assert!(published.iter().all(|p| p.published));
        assert!(published.len() < store.get_all().len());
    }

    #[test]
    fn get_by_slug_returns_none_on_miss() {
        let store = StaticStore::new();
        assert!(store.get_by_slug("no-such-slug").is_none());
    }

    #[test]
    fn get_by_slug_finds_known_post() {
        let store = StaticStore::new();
        let found = store
            .get_by_slug("choosing-a-cloud-migration-strategy")
            .expect("demo post exists");
        assert!(found.title.contains("Cloud Migration"));
    }

    #[test]
    fn duplicate_slug_returns_first_encountered() {
        // Latent bug class in the dataset: lookup stays deterministic.
        let store = StaticStore::with_data(
            vec![],
            vec![
                post("p1", "same-slug", true, 0),
                post("p2", "same-slug", true, 0),
            ],
        );
        let found = store.get_by_slug("same-slug").unwrap();
        assert_eq!(found.id.0, "p1");
    }

    #[tokio::test]
    async fn mutations_fail_with_configuration_error() {
        let store = StaticStore::new();
        let err = LeadStore::delete(&store, &LeadId("lead-demo-001".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, LumeoError::Config(_)));

        let err = ContentStore::increment_views(&store, &PostId("post-demo-001".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, LumeoError::Config(_)));
    }

    #[tokio::test]
    async fn views_are_stable_across_reads() {
        let store = StaticStore::new();
        let before: Vec<u64> = ContentStore::list_all(&store)
            .await
            .unwrap()
            .iter()
            .map(|p| p.views)
            .collect();
        let _ = ContentStore::get_by_slug(&store, "llm-features-worth-shipping").await;
        let after: Vec<u64> = ContentStore::list_all(&store)
            .await
            .unwrap()
            .iter()
            .map(|p| p.views)
            .collect();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn lead_list_is_newest_first() {
        let store = StaticStore::new();
        let leads = LeadStore::list(&store).await.unwrap();
        for pair in leads.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
