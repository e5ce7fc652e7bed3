//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::places::SeedOptions;
use crate::kernel::{ServerDeps, PAGE_FETCH_TIMEOUT};
use crate::server::routes::{
    get_place_handler, health_handler, image_proxy_handler, list_places_handler, seed_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
    pub seed_options: Arc<SeedOptions>,
    /// Client used by the image proxy.
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(deps: ServerDeps, seed_options: SeedOptions) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(PAGE_FETCH_TIMEOUT)
            .build()
            .context("Failed to create image proxy HTTP client")?;

        Ok(Self {
            deps: Arc::new(deps),
            seed_options: Arc::new(seed_options),
            http_client,
        })
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the Axum application router
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/places", get(list_places_handler))
        .route("/api/places/seed", post(seed_handler))
        .route("/api/places/:id", get(get_place_handler))
        .route("/api/images/proxy", get(image_proxy_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
