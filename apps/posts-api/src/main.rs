//! # Posts API Server
//!
//! Local HTTP entry point: serves `/posts` through the same dispatcher the
//! Lambda function uses.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use posts_api::config::AppConfig;
use posts_api::routes::configure_routes;
use posts_api::state::AppState;
use posts_api::telemetry::init_telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_telemetry(&config.telemetry);

    tracing::info!(
        "Starting posts API server on {}:{}",
        config.host,
        config.port
    );

    // Build application state
    let state = AppState::new(&config.store).await?;

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
