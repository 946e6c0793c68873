// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router assembly and server startup.

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;

use lumeo_core::error::LumeoError;

use crate::auth::admin_auth;
use crate::handlers;
use crate::state::AppState;

/// Builds the full route tree over the given state.
pub fn build_router(state: AppState) -> Router {
    // Unauthenticated public routes.
    let public_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/v1/inquiries", post(handlers::inquiries::submit_inquiry))
        .route("/v1/posts", get(handlers::posts::list_published))
        .route("/v1/posts/{slug}", get(handlers::posts::get_post))
        .route("/v1/posts/{slug}/views", post(handlers::posts::record_view))
        .route("/v1/admin/login", post(handlers::admin::login))
        .with_state(state.clone());

    // Routes behind the session gate.
    let admin_routes = Router::new()
        .route("/v1/admin/logout", post(handlers::admin::logout))
        .route("/v1/admin/leads", get(handlers::admin::list_leads))
        .route("/v1/admin/leads/export", get(handlers::admin::export_leads))
        .route("/v1/admin/leads/{id}", patch(handlers::admin::update_lead))
        .route("/v1/admin/leads/{id}", delete(handlers::admin::delete_lead))
        .route("/v1/admin/posts", get(handlers::admin::list_posts))
        .route("/v1/admin/status", get(handlers::admin::status))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            admin_auth,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(CorsLayer::permissive())
}

/// Binds and serves until the process is stopped.
pub async fn start_server(host: &str, port: u16, state: AppState) -> Result<(), LumeoError> {
    let addr = format!("{host}:{port}");
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| LumeoError::Internal(format!("failed to bind server to {addr}: {e}")))?;

    tracing::info!("lumeo gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| LumeoError::Internal(format!("server error: {e}")))?;

    Ok(())
}
