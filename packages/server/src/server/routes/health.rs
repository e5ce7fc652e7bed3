use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::server::app::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider_configured: bool,
    pub store_configured: bool,
}

/// Health check endpoint
///
/// Always answers 200 while the process is up. `status` is "degraded" when
/// the place provider or store is missing, since seeding cannot run then.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let provider_configured = state.deps.provider_configured();
    let store_configured = state.deps.store_configured();

    let status = if provider_configured && store_configured {
        "ok"
    } else {
        "degraded"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            provider_configured,
            store_configured,
        }),
    )
}
