// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Public blog content reads.
//!
//! Reads never touch the view counter; `POST /v1/posts/{slug}/views` is
//! the one dedicated increment operation.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use lumeo_content::render_markdown_lite;
use lumeo_core::error::LumeoError;
use lumeo_core::types::BlogPost;

use crate::error::ApiError;
use crate::state::AppState;

/// Listing entry for the blog index.
#[derive(Debug, Serialize)]
pub struct PostSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub reading_time_minutes: u32,
    pub published_at: Option<String>,
    pub views: u64,
    pub trending: bool,
    pub ai_generated: bool,
}

impl PostSummary {
    fn from_post(post: &BlogPost) -> Self {
        Self {
            id: post.id.0.clone(),
            slug: post.slug.0.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            author: post.author.clone(),
            category: post.category.to_string(),
            tags: post.tags.clone(),
            reading_time_minutes: post.reading_time_minutes,
            published_at: post.published_at.map(|t| t.to_rfc3339()),
            views: post.views,
            trending: post.is_trending(),
            ai_generated: post.ai_generated,
        }
    }
}

/// Detail view with rendered body and SEO fallbacks applied.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub summary: PostSummary,
    pub content_html: String,
    pub seo_title: String,
    pub seo_description: String,
}

/// Response body for the view-increment operation.
#[derive(Debug, Serialize)]
pub struct ViewsResponse {
    pub views: u64,
}

/// GET /v1/posts — published posts only.
pub async fn list_published(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostSummary>>, ApiError> {
    let posts = state.content.list_published().await?;
    Ok(Json(posts.iter().map(PostSummary::from_post).collect()))
}

/// GET /v1/posts/{slug}
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PostDetail>, ApiError> {
    let post = state
        .content
        .get_by_slug(&slug)
        .await?
        .ok_or(LumeoError::NotFound {
            entity: "blog post",
            key: slug,
        })?;

    Ok(Json(PostDetail {
        content_html: render_markdown_lite(&post.content),
        seo_title: post.effective_seo_title().to_string(),
        seo_description: post.effective_seo_description().to_string(),
        summary: PostSummary::from_post(&post),
    }))
}

/// POST /v1/posts/{slug}/views — the dedicated increment operation.
pub async fn record_view(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ViewsResponse>, ApiError> {
    let post = state
        .content
        .get_by_slug(&slug)
        .await?
        .ok_or(LumeoError::NotFound {
            entity: "blog post",
            key: slug,
        })?;

    let views = state.content.increment_views(&post.id).await?;
    Ok(Json(ViewsResponse { views }))
}
