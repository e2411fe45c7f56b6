use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use mockmint::config::Settings;
use mockmint::core::FakeDataGenerator;
use mockmint::routes::{self, data::AppState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Mockmint synthetic data service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the fake data generator; a bad locale is fatal because no
    // endpoint can serve records without it
    let generator = FakeDataGenerator::from_settings(&settings.generator).unwrap_or_else(|e| {
        error!("Failed to initialize fake data generator: {}", e);
        panic!("Generator error: {}", e);
    });

    info!("Fake data generator initialized (locale: {:?})", generator.locale());

    // Build application state
    let app_state = AppState {
        generator: Arc::new(generator),
        batch_size: settings.generator.batch_size,
    };

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
