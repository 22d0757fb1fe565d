//! Catalog Gateway - HTTP proxy for the storefront's upstream catalog API
//!
//! This library exposes a single read-only gateway route that forwards a GET
//! request to the external catalog service and relays the result, collapsing
//! every failure mode to one fixed error response.

pub mod config;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use models::{ErrorResponse, HealthResponse};
pub use routes::proxy::AppState;
pub use services::{CatalogClient, CatalogError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let response = ErrorResponse::fetch_failed();
        assert_eq!(response.error, "Failed to fetch data");
    }
}
