// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error-to-response mapping for the HTTP surface.
//!
//! Every failure becomes a stable `{ "error": ... }` JSON body with the
//! status implied by the taxonomy. Errors are converted at this
//! boundary; nothing propagates as an unhandled panic to a global
//! handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use lumeo_core::error::LumeoError;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Newtype carrying a `LumeoError` out of a handler.
#[derive(Debug)]
pub struct ApiError(pub LumeoError);

impl From<LumeoError> for ApiError {
    fn from(err: LumeoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            LumeoError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
            LumeoError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            LumeoError::NotFound { .. } => StatusCode::NOT_FOUND,
            LumeoError::Backend { .. } | LumeoError::Network { .. } => StatusCode::BAD_GATEWAY,
            LumeoError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            LumeoError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: LumeoError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn taxonomy_maps_to_stable_status_codes() {
        assert_eq!(
            status_of(LumeoError::Config("x".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(LumeoError::Validation {
                fields: vec!["name".into()]
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(LumeoError::NotFound {
                entity: "lead",
                key: "x".into()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(LumeoError::backend("x")),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(LumeoError::Unauthorized("x".into())),
            StatusCode::UNAUTHORIZED
        );
    }
}
