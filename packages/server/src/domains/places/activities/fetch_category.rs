//! Category fetch activity - one text search per provider sub-type.
//!
//! Results are validated at the provider boundary: records without an
//! external id are dropped, as are ids already seen within this category.

use places_client::PlaceSummary;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::domains::places::categories::PlaceCategory;
use crate::domains::places::models::{is_local_favorite, Candidate, GeoPoint, PlaceDetailsData};
use crate::kernel::BasePlaceProvider;

/// Raw search results considered per sub-type query.
pub const MAX_RESULTS_PER_QUERY: usize = 10;

/// Photo URLs taken from each search result.
pub const MAX_PHOTOS_PER_RESULT: usize = 3;

pub fn search_query(place_type: &str, destination: &str) -> String {
    format!("{} in {}", place_type, destination)
}

/// Fetch candidates for one category. Failed sub-type queries are logged
/// and skipped, so the result may be empty but never an error.
pub async fn fetch_category(
    destination: &str,
    category: &PlaceCategory,
    provider: &dyn BasePlaceProvider,
) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for place_type in &category.place_types {
        let query = search_query(place_type, destination);

        let results = match provider.text_search(&query, place_type).await {
            Ok(results) => results,
            Err(e) => {
                warn!(
                    category = %category.label,
                    query = %query,
                    error = %e,
                    "Place search failed, skipping sub-type"
                );
                continue;
            }
        };

        debug!(query = %query, results = results.len(), "Place search returned");

        for summary in results.into_iter().take(MAX_RESULTS_PER_QUERY) {
            let Some(external_id) = summary.place_id.clone() else {
                debug!(name = ?summary.name, "Skipping search result without place id");
                continue;
            };
            if !seen.insert(external_id.clone()) {
                continue;
            }

            candidates.push(build_candidate(
                external_id,
                summary,
                destination,
                &category.label,
                provider,
            ));
        }
    }

    info!(
        destination = %destination,
        category = %category.label,
        count = candidates.len(),
        "Fetched category candidates"
    );

    candidates
}

fn build_candidate(
    external_id: String,
    summary: PlaceSummary,
    destination: &str,
    category: &str,
    provider: &dyn BasePlaceProvider,
) -> Candidate {
    let location = summary
        .geometry
        .and_then(|g| g.location)
        .and_then(|l| Some(GeoPoint { lat: l.lat?, lng: l.lng? }));

    let mut candidate = Candidate {
        external_id,
        name: summary.name.unwrap_or_default(),
        destination: destination.to_string(),
        category: category.to_string(),
        location,
        details: PlaceDetailsData {
            rating: summary.rating,
            review_count: summary.user_ratings_total,
            price_level: summary.price_level,
            address: summary.formatted_address,
            types: summary.types,
            business_status: summary.business_status,
            ..Default::default()
        },
        website_url: None,
        website_content: Default::default(),
        image_urls: Vec::new(),
        is_local_favorite: is_local_favorite(summary.rating, summary.user_ratings_total),
    };

    let references = summary
        .photos
        .iter()
        .filter_map(|p| p.photo_reference.as_deref())
        .take(MAX_PHOTOS_PER_RESULT);
    for reference in references {
        candidate.push_image_url(provider.photo_url(reference));
    }

    candidate
}
