//! Google Places adapter - wraps the pure REST client behind BasePlaceProvider.

use anyhow::Result;
use async_trait::async_trait;
use places_client::{PlaceDetails, PlaceSummary, PlacesClient};

use super::BasePlaceProvider;

pub struct GooglePlacesProvider(PlacesClient);

impl GooglePlacesProvider {
    pub fn new(api_key: String) -> Self {
        Self(PlacesClient::new(api_key))
    }
}

#[async_trait]
impl BasePlaceProvider for GooglePlacesProvider {
    async fn text_search(&self, query: &str, place_type: &str) -> Result<Vec<PlaceSummary>> {
        self.0
            .text_search(query, Some(place_type))
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }

    async fn place_details(&self, external_id: &str, fields: &[&str]) -> Result<PlaceDetails> {
        self.0
            .place_details(external_id, fields)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }

    fn photo_url(&self, photo_reference: &str) -> String {
        self.0.photo_url(photo_reference)
    }
}
