// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure, synchronous narrowing of in-memory collections for the admin
//! listing views.
//!
//! Composition is the intersection of a case-insensitive substring
//! search and every active exact-match criterion. Output order equals
//! input order; filtering never resorts.

use std::str::FromStr;

use lumeo_core::types::{BlogCategory, BlogPost, Lead, LeadStatus};

/// Exact-match status criterion. `All` is the "all" sentinel and
/// matches unconditionally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeadStatus),
}

impl FromStr for StatusFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            LeadStatus::from_str(s).map(Self::Only)
        }
    }
}

/// Exact-match category criterion for blog posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(BlogCategory),
}

impl FromStr for CategoryFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            BlogCategory::from_str(s).map(Self::Only)
        }
    }
}

/// Filter state of the lead listing view.
#[derive(Debug, Clone, Default)]
pub struct LeadQuery {
    /// Free-text search; empty matches all records.
    pub search: String,
    pub status: StatusFilter,
}

/// Filter state of the blog listing view.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub search: String,
    pub category: CategoryFilter,
}

/// Narrows `leads` to those matching the query, preserving input order.
pub fn filter_leads(leads: &[Lead], query: &LeadQuery) -> Vec<Lead> {
    let needle = query.search.trim().to_lowercase();
    leads
        .iter()
        .filter(|lead| matches_lead_search(lead, &needle))
        .filter(|lead| match query.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => lead.status == status,
        })
        .cloned()
        .collect()
}

/// Narrows `posts` to those matching the query, preserving input order.
pub fn filter_posts(posts: &[BlogPost], query: &PostQuery) -> Vec<BlogPost> {
    let needle = query.search.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| matches_post_search(post, &needle))
        .filter(|post| match query.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => post.category == category,
        })
        .cloned()
        .collect()
}

/// A lead matches if ANY searchable field (name, email, company)
/// contains the search string, case-insensitively.
fn matches_lead_search(lead: &Lead, lowered_needle: &str) -> bool {
    if lowered_needle.is_empty() {
        return true;
    }
    contains_ci(&lead.name, lowered_needle)
        || contains_ci(&lead.email, lowered_needle)
        || lead
            .company
            .as_deref()
            .is_some_and(|company| contains_ci(company, lowered_needle))
}

fn matches_post_search(post: &BlogPost, lowered_needle: &str) -> bool {
    if lowered_needle.is_empty() {
        return true;
    }
    contains_ci(&post.title, lowered_needle) || contains_ci(&post.author, lowered_needle)
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
