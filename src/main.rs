mod config;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use config::Settings;
use routes::proxy::AppState;
use services::CatalogClient;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the logging section applies
    let settings = Settings::load().unwrap_or_else(|e| {
        panic!("Configuration error: {}", e);
    });

    // Initialize logging; LOG_LEVEL / LOG_FORMAT env vars override the config
    // The subscriber is not installed yet, so an invalid directive goes to stderr
    let filter = EnvFilter::try_new(settings.logging.directive()).unwrap_or_else(|e| {
        eprintln!("Invalid log level directive, falling back to info: {}", e);
        EnvFilter::new("info")
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.output_format() == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting catalog gateway...");
    info!("Configuration loaded successfully");

    // Initialize the upstream catalog client
    let catalog = Arc::new(CatalogClient::new(
        settings.upstream.base_url.clone(),
        settings.upstream.timeout_secs,
    ));

    info!(
        "Catalog client initialized (upstream: {}, timeout: {}s)",
        settings.upstream.base_url, settings.upstream.timeout_secs
    );

    // Build application state
    let app_state = AppState { catalog };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
