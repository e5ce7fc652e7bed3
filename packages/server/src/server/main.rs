// Main entry point for the places API server

use anyhow::{Context, Result};
use server_core::domains::places::SeedOptions;
use server_core::kernel::{
    BasePlaceProvider, BasePlaceStore, GooglePlacesProvider, HttpPageFetcher, PostgresPlaceStore,
    ReadableTextExtractor, ServerDeps,
};
use server_core::server::{build_app, AppState};
use server_core::Config;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting places API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    let place_provider: Option<Arc<dyn BasePlaceProvider>> = match config.google_places_api_key {
        Some(key) => Some(Arc::new(GooglePlacesProvider::new(key))),
        None => {
            tracing::warn!("GOOGLE_PLACES_API_KEY not set, seeding is disabled");
            None
        }
    };
    let place_store: Arc<dyn BasePlaceStore> = Arc::new(PostgresPlaceStore::new(pool));

    let deps = ServerDeps::new(
        place_provider,
        Arc::new(HttpPageFetcher::new()?),
        Arc::new(ReadableTextExtractor::new()),
        Some(place_store),
    );

    // Build application
    let state = AppState::new(deps, SeedOptions::default())?;
    let app = build_app(state, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
