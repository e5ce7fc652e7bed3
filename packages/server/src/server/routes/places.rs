use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{error, info};

use super::{api_error, ApiError};
use crate::common::PlaceId;
use crate::domains::places::data::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use crate::domains::places::{
    seed_destination, ListPlacesQuery, Place, PlaceFilter, SeedRequest, SeedResponse,
};
use crate::kernel::BasePlaceStore;
use crate::server::app::AppState;

/// POST /api/places/seed
pub async fn seed_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<SeedRequest>,
) -> (StatusCode, Json<SeedResponse>) {
    let destination = request.destination.trim();
    if destination.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(SeedResponse::failure(destination, "destination must not be empty")),
        );
    }

    info!(destination = %destination, "Seed requested");

    match seed_destination(destination, &state.seed_options, &state.deps).await {
        Ok(outcome) => (StatusCode::OK, Json(SeedResponse::from_outcome(&outcome))),
        Err(e) => {
            error!(destination = %destination, error = %e, "Seed failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SeedResponse::from_error(destination, &e)),
            )
        }
    }
}

/// GET /api/places?destination=&category=&limit=
pub async fn list_places_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<ListPlacesQuery>,
) -> Result<Json<Vec<Place>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    if !(1..=MAX_LIST_LIMIT).contains(&limit) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            format!("limit must be between 1 and {}", MAX_LIST_LIMIT),
        ));
    }

    let filter = PlaceFilter {
        destination: query.destination.filter(|d| !d.is_empty()),
        category: query.category.filter(|c| !c.is_empty()),
        limit,
    };

    let store = require_store(&state)?;
    let places = store.list_places(&filter).await.map_err(|e| {
        error!(error = %e, "Failed to list places");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to list places")
    })?;

    Ok(Json(places))
}

/// GET /api/places/:id
pub async fn get_place_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<PlaceId>,
) -> Result<Json<Place>, ApiError> {
    let store = require_store(&state)?;
    let place = store.find_place(id).await.map_err(|e| {
        error!(place_id = %id, error = %e, "Failed to load place");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to load place")
    })?;

    place
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Place not found"))
}

fn require_store(state: &AppState) -> Result<Arc<dyn BasePlaceStore>, ApiError> {
    state
        .deps
        .place_store
        .clone()
        .ok_or_else(|| api_error(StatusCode::SERVICE_UNAVAILABLE, "place store is not configured"))
}
