mod config;
mod handlers;
mod models;
mod seed;
mod store;

use actix_web::{web, App, HttpServer};
use config::AppConfig;
use handlers::{configure, cors_middleware, wildcard_origin_header};
use seed::SeedOutcome;
use std::io;
use store::MongoStore;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{self, EnvFilter};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,ecommerce_api=debug")),
        )
        .init();

    let config = AppConfig::from_env();
    info!(
        "Starting e-commerce API server (variant {:?}, cors {})",
        config.variant, config.cors_enabled
    );

    let store = MongoStore::connect(&config).await.map_err(|e| {
        error!("Failed to initialize MongoDB: {}", e);
        io::Error::other(e)
    })?;
    info!("MongoDB connection established");

    let outcome = seed::seed_if_empty(&store, config.variant).await.map_err(|e| {
        error!("Failed to seed products collection: {}", e);
        io::Error::other(e)
    })?;
    match outcome {
        SeedOutcome::Seeded(count) => info!("Inserted {} sample products", count),
        SeedOutcome::AlreadyPopulated(count) => info!("Skipping seed, {} products present", count),
    }

    let store = web::Data::new(store);
    let variant = web::Data::new(config.variant);
    let cors_enabled = config.cors_enabled;

    info!("Listening on {}", config.bind_address);
    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(cors_enabled))
            .wrap(wildcard_origin_header(cors_enabled))
            .wrap(TracingLogger::default())
            .app_data(store.clone())
            .app_data(variant.clone())
            .configure(configure::<MongoStore>)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
