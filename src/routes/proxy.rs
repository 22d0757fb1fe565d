use actix_web::{web, HttpResponse, Responder};
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::CatalogClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
}

/// Configure the proxy routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/proxy", web::get().to(proxy_categories));
}

/// Health check endpoint
///
/// Does not probe the upstream: a load-balancer health check must not
/// generate catalog traffic.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Proxy endpoint for the upstream category listing
///
/// GET /api/proxy
///
/// Reads nothing from the inbound request and issues exactly one outbound
/// GET to the fixed upstream endpoint. On success the upstream payload is
/// relayed as-is; on any failure the response is a fixed 500 body. Failure
/// causes are intentionally not distinguished for the caller.
async fn proxy_categories(state: web::Data<AppState>) -> impl Responder {
    match state.catalog.get_all_categories().await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => {
            tracing::error!("Failed to fetch categories from upstream: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::fetch_failed())
        }
    }
}
