//! HTTP routes for the local server.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").route("/health", web::get().to(health::health_check)))
        // Every method goes to the dispatcher, which decides what it supports.
        .service(web::resource("/posts").route(web::route().to(posts::posts)));
}
