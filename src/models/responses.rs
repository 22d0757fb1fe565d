use serde::{Deserialize, Serialize};

/// Error response for the proxy endpoint.
///
/// Deliberately a single field with a fixed message: callers cannot
/// distinguish failure causes, only that the fetch did not succeed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn fetch_failed() -> Self {
        Self {
            error: "Failed to fetch data".to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
