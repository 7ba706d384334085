//! # Dreamlog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Dreamlog API Server on {}:{}",
        config.host,
        config.port
    );
    match &config.frontend_url {
        Some(origin) => tracing::info!(origin = %origin, "CORS origin configured"),
        None => tracing::warn!("FRONTEND_URL not set. Cross-origin requests will be rejected."),
    }

    let state = AppState::new(&config).await;
    let frontend_url = config.frontend_url.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::cors::cors(frontend_url.as_deref()))
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
