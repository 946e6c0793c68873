// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic record builders for tests.

use chrono::{DateTime, TimeZone, Utc};
use lumeo_core::types::{
    BlogCategory, BlogPost, Lead, LeadId, LeadStatus, PostId, ServiceOffering, Slug,
};

/// Fixed timestamp all fixtures hang off: 2026-03-01 09:00 UTC.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
        .single()
        .expect("fixture timestamp is valid")
}

/// A lead with predictable fields; `offset_minutes` staggers creation
/// times so ordering assertions have something to bite on.
pub fn lead(id: &str, name: &str, status: LeadStatus, offset_minutes: i64) -> Lead {
    let at = base_time() + chrono::Duration::minutes(offset_minutes);
    Lead {
        id: LeadId(id.into()),
        name: name.into(),
        email: format!("{id}@example.com"),
        company: Some(format!("{name} Co")),
        phone: None,
        service: ServiceOffering::WebDevelopment,
        budget: None,
        message: "A sufficiently long inquiry message.".into(),
        status,
        source: "Contact Form".into(),
        created_at: at,
        updated_at: at,
    }
}

/// A blog post with predictable fields.
pub fn post(id: &str, slug: &str, published: bool, offset_minutes: i64) -> BlogPost {
    let at = base_time() + chrono::Duration::minutes(offset_minutes);
    BlogPost {
        id: PostId(id.into()),
        slug: Slug(slug.into()),
        title: format!("Post {id}"),
        excerpt: format!("Excerpt for {id}."),
        content: format!("# Post {id}\nBody with **emphasis**."),
        author: "Elena Vasquez".into(),
        category: BlogCategory::WebDevelopment,
        tags: vec!["test".into()],
        reading_time_minutes: 4,
        published,
        published_at: published.then_some(at),
        views: 10,
        seo_title: None,
        seo_description: None,
        ai_generated: false,
        trending_score: 50,
        created_at: at,
        updated_at: at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_offsets_stagger_creation_times() {
        let a = lead("l1", "Ada", LeadStatus::New, 0);
        let b = lead("l2", "Grace", LeadStatus::New, 5);
        assert!(b.created_at > a.created_at);
    }

    #[test]
    fn draft_posts_have_no_publish_timestamp() {
        assert!(post("p1", "draft", false, 0).published_at.is_none());
        assert!(post("p2", "live", true, 0).published_at.is_some());
    }
}
