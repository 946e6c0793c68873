// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Lumeo workspace.
//!
//! Records mirror the wire shape of the hosted backend collections
//! (`leads` and `blog_posts`); enumerated value sets use their
//! `snake_case` wire spelling for both serde and Display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Trending badge threshold: a post is "trending" strictly above this score.
pub const TRENDING_THRESHOLD: u8 = 85;

/// Opaque unique identifier of a lead record. Immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Opaque unique identifier of a blog post record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub String);

/// URL-safe unique lookup key for blog post detail pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(pub String);

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Workflow status of a lead. Defaults to `New` at creation; any value is
/// settable by an operator action — there is no enforced transition graph
/// beyond this allowed set.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Proposal,
    Closed,
}

/// The consultancy's service-offering list, as presented on the inquiry form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ServiceOffering {
    WebDevelopment,
    MobileDevelopment,
    CloudSolutions,
    DataAnalytics,
    DigitalMarketing,
    ItConsulting,
}

/// Budget range selected on the inquiry form. Wire names are spelled
/// out because the digit boundaries defeat automatic case conversion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum BudgetRange {
    #[strum(serialize = "under_10k")]
    #[serde(rename = "under_10k")]
    Under10k,
    #[strum(serialize = "range_10k_to_25k")]
    #[serde(rename = "range_10k_to_25k")]
    Range10kTo25k,
    #[strum(serialize = "range_25k_to_50k")]
    #[serde(rename = "range_25k_to_50k")]
    Range25kTo50k,
    #[strum(serialize = "range_50k_to_100k")]
    #[serde(rename = "range_50k_to_100k")]
    Range50kTo100k,
    #[strum(serialize = "over_100k")]
    #[serde(rename = "over_100k")]
    Over100k,
}

/// Blog post category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BlogCategory {
    WebDevelopment,
    CloudComputing,
    ArtificialIntelligence,
    DigitalStrategy,
    CaseStudy,
}

/// A sales inquiry record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub service: ServiceOffering,
    #[serde(default)]
    pub budget: Option<BudgetRange>,
    pub message: String,
    #[serde(default)]
    pub status: LeadStatus,
    /// Provenance, free text ("Contact Form" for form-created leads).
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a lead. The backend assigns id and timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service: ServiceOffering,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetRange>,
    pub message: String,
    pub status: LeadStatus,
    pub source: String,
}

/// Partial update of a lead. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceOffering>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
}

impl LeadPatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.company.is_none()
            && self.phone.is_none()
            && self.service.is_none()
            && self.budget.is_none()
            && self.message.is_none()
            && self.status.is_none()
    }
}

/// A blog content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    pub slug: Slug,
    pub title: String,
    pub excerpt: String,
    /// Raw markdown-like text; rendered lossily at read time
    /// (headings, bold, and line breaks only).
    pub content: String,
    pub author: String,
    pub category: BlogCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Precomputed at authoring time, not derived at read time.
    pub reading_time_minutes: u32,
    pub published: bool,
    /// Absent implies draft.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Monotonically non-decreasing; incremented only by the dedicated
    /// increment operation, never by ordinary reads.
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
    /// 0-100, used only for the trending badge.
    #[serde(default)]
    pub trending_score: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// SEO title with fallback to the display title.
    pub fn effective_seo_title(&self) -> &str {
        self.seo_title.as_deref().unwrap_or(&self.title)
    }

    /// SEO description with fallback to the excerpt.
    pub fn effective_seo_description(&self) -> &str {
        self.seo_description.as_deref().unwrap_or(&self.excerpt)
    }

    pub fn is_trending(&self) -> bool {
        self.trending_score > TRENDING_THRESHOLD
    }
}

/// Fields for creating a blog post. The backend assigns id and timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub slug: Slug,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    pub reading_time_minutes: u32,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    pub ai_generated: bool,
    pub trending_score: u8,
}

/// Partial update of a blog post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<BlogCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_score: Option<u8>,
}
