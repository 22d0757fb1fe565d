// Route exports
pub mod proxy;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(proxy::health_check))
        .service(web::scope("/api").configure(proxy::configure));
}
