// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin dashboard API: login/logout, lead triage with search and
//! status filtering, CSV export of the filtered rows, the full post
//! list, and the integration status report.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use lumeo_admin::{
    filter_leads, filter_posts, leads_to_csv, CategoryFilter, LeadQuery, PostQuery, Session,
    StatusFilter,
};
use lumeo_core::error::LumeoError;
use lumeo_core::types::{BlogPost, Lead, LeadId, LeadPatch};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /v1/admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: String,
}

/// Query string of the lead listing and export routes.
#[derive(Debug, Default, Deserialize)]
pub struct LeadListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl LeadListParams {
    /// Converts the raw query string into the filter state; an
    /// unrecognized status value is a validation error, not a silent
    /// match-nothing.
    fn to_query(&self) -> Result<LeadQuery, LumeoError> {
        let status = match self.status.as_deref() {
            None => StatusFilter::All,
            Some(raw) => raw.parse().map_err(|_| LumeoError::Validation {
                fields: vec!["status".to_string()],
            })?,
        };
        Ok(LeadQuery {
            search: self.search.clone().unwrap_or_default(),
            status,
        })
    }
}

/// Response body for the lead listing.
#[derive(Debug, Serialize)]
pub struct LeadListResponse {
    pub leads: Vec<Lead>,
    pub total: usize,
}

/// POST /v1/admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state.gate.authenticate(&body.username, &body.password)?;
    Ok(Json(LoginResponse {
        token: session.token,
        username: session.username,
        role: session.role,
    }))
}

/// POST /v1/admin/logout
pub async fn logout(
    State(state): State<AppState>,
    axum::Extension(session): axum::Extension<Session>,
) -> StatusCode {
    state.gate.logout(&session.token);
    StatusCode::NO_CONTENT
}

/// GET /v1/admin/leads?search=&status=
pub async fn list_leads(
    State(state): State<AppState>,
    Query(params): Query<LeadListParams>,
) -> Result<Json<LeadListResponse>, ApiError> {
    let query = params.to_query()?;
    let leads = state.leads.list().await?;
    let filtered = filter_leads(&leads, &query);
    Ok(Json(LeadListResponse {
        total: filtered.len(),
        leads: filtered,
    }))
}

/// PATCH /v1/admin/leads/{id}
pub async fn update_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<LeadPatch>,
) -> Result<Json<Lead>, ApiError> {
    let updated = state.leads.update(&LeadId(id), patch).await?;
    Ok(Json(updated))
}

/// DELETE /v1/admin/leads/{id}
pub async fn delete_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.leads.delete(&LeadId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/admin/leads/export?search=&status=
///
/// Exports exactly the currently filtered rows as `text/csv`.
pub async fn export_leads(
    State(state): State<AppState>,
    Query(params): Query<LeadListParams>,
) -> Result<Response, ApiError> {
    let query = params.to_query()?;
    let leads = state.leads.list().await?;
    let filtered = filter_leads(&leads, &query);
    let csv = leads_to_csv(&filtered)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"leads.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

/// Query string of the post listing route.
#[derive(Debug, Default, Deserialize)]
pub struct PostListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl PostListParams {
    fn to_query(&self) -> Result<PostQuery, LumeoError> {
        let category = match self.category.as_deref() {
            None => CategoryFilter::All,
            Some(raw) => raw.parse().map_err(|_| LumeoError::Validation {
                fields: vec!["category".to_string()],
            })?,
        };
        Ok(PostQuery {
            search: self.search.clone().unwrap_or_default(),
            category,
        })
    }
}

/// GET /v1/admin/posts?search=&category= — all posts including drafts.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let query = params.to_query()?;
    let posts = state.content.list_all().await?;
    Ok(Json(filter_posts(&posts, &query)))
}

/// GET /v1/admin/status — integration snapshot, including the disabled
/// content-generation placeholder in fallback mode.
pub async fn status(State(state): State<AppState>) -> Json<crate::state::FeatureStatus> {
    Json(state.features.clone())
}
