// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Low-level HTTP client for the hosted backend data API.
//!
//! The wire protocol is PostgREST-style: collections under
//! `/rest/v1/{collection}` with query-string filters (`id=eq.<id>`),
//! `Prefer: return=representation` for write echoes, and scalar
//! functions under `/rest/v1/rpc/{function}`. Errors come back as a
//! JSON body with a Postgres error `code`; `42P01` (undefined table)
//! means the schema setup was never applied.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use lumeo_core::error::LumeoError;

use crate::leads::LeadCollection;
use crate::posts::PostCollection;

/// Requests that outlive this are surfaced to the operator instead of
/// leaving the caller waiting indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the hosted backend.
///
/// Construct via [`crate::settings::BackendSettings::client`] so the
/// configuration gate runs first, or directly in tests.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a client with authentication headers preconfigured.
    pub fn new(base_url: &str, service_key: &str) -> Result<Self, LumeoError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(service_key).map_err(|e| {
                LumeoError::Config(format!("backend.service_key is not a valid header value: {e}"))
            })?,
        );
        let mut bearer = HeaderValue::from_str(&format!("Bearer {service_key}")).map_err(|e| {
            LumeoError::Config(format!("backend.service_key is not a valid header value: {e}"))
        })?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LumeoError::Network {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Handle on the `leads` collection.
    pub fn leads(&self) -> LeadCollection {
        LeadCollection::new(self.clone())
    }

    /// Handle on the `blog_posts` collection.
    pub fn posts(&self) -> PostCollection {
        PostCollection::new(self.clone())
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn collection_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{collection}", self.base_url)
    }

    pub(crate) fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{function}", self.base_url)
    }

    /// Reads the row array of a successful response.
    pub(crate) async fn rows<T: DeserializeOwned>(
        &self,
        collection: &str,
        response: reqwest::Response,
    ) -> Result<Vec<T>, LumeoError> {
        let status = response.status();
        debug!(%status, collection, "backend response received");

        if !status.is_success() {
            return Err(error_from_response(collection, response).await);
        }

        let body = response.text().await.map_err(|e| LumeoError::Network {
            message: format!("failed to read backend response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        serde_json::from_str(&body).map_err(|e| LumeoError::backend(format!(
            "failed to parse backend response for `{collection}`: {e}"
        )))
    }
}

/// Maps a transport-level failure (DNS, connect, timeout) to the error
/// taxonomy.
pub(crate) fn transport_error(e: reqwest::Error) -> LumeoError {
    LumeoError::Network {
        message: format!("backend request failed: {e}"),
        source: Some(Box::new(e)),
    }
}

/// PostgREST error body shape.
#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// Undefined-table Postgres error code: the collection was never created.
const UNDEFINED_TABLE: &str = "42P01";

/// Converts a non-success response into the error taxonomy, keeping the
/// missing-schema case distinguishable from everything else.
pub(crate) async fn error_from_response(
    collection: &str,
    response: reqwest::Response,
) -> LumeoError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if let Ok(api_err) = serde_json::from_str::<ApiError>(&body) {
        if api_err.code.as_deref() == Some(UNDEFINED_TABLE) {
            return LumeoError::missing_collection(format!(
                "collection `{collection}` does not exist on the backend; apply the schema setup \
                 before using live data"
            ));
        }
        let detail = api_err
            .message
            .or(api_err.hint)
            .unwrap_or_else(|| body.clone());
        return LumeoError::backend(format!("backend returned {status}: {detail}"));
    }

    LumeoError::backend(format!("backend returned {status}: {body}"))
}
