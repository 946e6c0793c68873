// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bearer-token middleware for the admin routes.
//!
//! Sessions are minted by `POST /v1/admin/login` and checked here on
//! every admin request. The verified session is attached as a request
//! extension for handlers that want to know who is acting.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use lumeo_core::error::LumeoError;

use crate::error::ApiError;
use crate::state::AppState;

/// Middleware validating the `Authorization: Bearer <token>` header
/// against the session table.
pub async fn admin_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    let Some(token) = token else {
        return Err(ApiError(LumeoError::Unauthorized(
            "missing bearer token".to_string(),
        )));
    };

    let Some(session) = state.gate.verify(token) else {
        return Err(ApiError(LumeoError::Unauthorized(
            "invalid or logged-out session".to_string(),
        )));
    };

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}
