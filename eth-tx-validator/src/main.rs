use actix_web::{web, App, HttpServer};
use eth_tx_validator::{api, config, service::ValidationService};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

/// Application entry point
///
/// This is the main function that:
/// 1. Sets up logging
/// 2. Loads configuration
/// 3. Creates the validation service
/// 4. Starts the HTTP server with all endpoints
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Debug output for our service, less noise from dependencies
    let filter = EnvFilter::from_default_env()
        .add_directive("eth_tx_validator=info".parse().unwrap())
        .add_directive("actix_web=error".parse().unwrap())
        .add_directive("hyper=warn".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    let config = config::Config::from_env().expect("Failed to load config");
    info!(
        "Starting validation service on {}:{} (default chain {})",
        config.host, config.port, config.default_chain_id
    );

    // Shared, immutable validation service
    let service = Arc::new(ValidationService::from_config(&config));

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(service.clone()))
            .configure(api::configure)
    })
    .workers(4)
    .bind(format!("{}:{}", config.host, config.port))?
    .run()
    .await
}
