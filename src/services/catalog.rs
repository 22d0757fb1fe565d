use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Default upstream catalog host. Kept as a literal constant; the config
/// layer can override it for staging and tests but deployments do not need to.
pub const DEFAULT_UPSTREAM_BASE: &str = "http://catalogapi.somee.com";

/// Path of the category-listing endpoint on the upstream host.
pub const CATEGORIES_PATH: &str = "/api/Categories/GetAll";

/// Default bound on the whole outbound request, connect through body read.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur when talking to the upstream catalog API.
///
/// Callers of the gateway never see these distinctions; every variant
/// collapses to the same 500 response at the route boundary. The variants
/// exist for logging.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned error status: {0}")]
    UpstreamStatus(StatusCode),
}

/// Client for the external catalog service.
///
/// Holds one long-lived `reqwest::Client` built at startup. Each call is a
/// single parameterless GET with no auth, no retries and no caching.
pub struct CatalogClient {
    base_url: String,
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// `timeout_secs` bounds the entire outbound request; a slow upstream
    /// becomes a `CatalogError::Request` rather than a hung handler.
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Fetch the full category listing from the upstream service.
    ///
    /// The payload has no declared schema upstream, so it is returned as an
    /// opaque `serde_json::Value` and never inspected. Non-2xx statuses and
    /// bodies that fail to parse as JSON are both errors.
    pub async fn get_all_categories(&self) -> Result<Value, CatalogError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), CATEGORIES_PATH);

        tracing::debug!("Fetching categories from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::UpstreamStatus(response.status()));
        }

        let json: Value = response.json().await?;

        Ok(json)
    }
}
