//! Pure Google Places web service client.
//!
//! A minimal client for the legacy Places web service: text search, place
//! details, and photo URL construction. Responses are decoded into types whose
//! fields are all optional, so callers validate what they need at the edge.
//!
//! # Example
//!
//! ```rust,ignore
//! use places_client::PlacesClient;
//!
//! let client = PlacesClient::new("your-api-key".into());
//!
//! let hits = client.text_search("ramen in Tokyo", Some("restaurant")).await?;
//! for hit in &hits {
//!     println!("{}", hit.name.as_deref().unwrap_or("(unnamed)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{PlacesError, Result};
pub use types::{
    DetailsResponse, EditorialSummary, Geometry, LatLng, OpeningHours, Photo, PlaceDetails,
    PlaceSummary, Review, TextSearchResponse,
};

use serde::de::DeserializeOwned;

const BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Prefix shared by every photo URL this client builds. Anything proxied on
/// behalf of the photo provider must start with it.
pub const PHOTO_URL_PREFIX: &str = "https://maps.googleapis.com/maps/api/place/photo";

/// Width requested for photos.
const PHOTO_MAX_WIDTH: u32 = 800;

/// Statuses that carry a usable payload.
const OK: &str = "OK";
const ZERO_RESULTS: &str = "ZERO_RESULTS";

pub struct PlacesClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PlacesClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host (local stub servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Free-text search, optionally restricted to one place type.
    /// `ZERO_RESULTS` is an empty list, not an error.
    pub async fn text_search(
        &self,
        query: &str,
        place_type: Option<&str>,
    ) -> Result<Vec<PlaceSummary>> {
        let url = format!("{}/textsearch/json", self.base_url);

        let mut params = vec![("query", query), ("key", self.api_key.as_str())];
        if let Some(place_type) = place_type {
            params.push(("type", place_type));
        }

        tracing::debug!(query, place_type, "Places text search");
        let response: TextSearchResponse = self.get_json(&url, &params).await?;
        check_status(&response.status, response.error_message)?;

        Ok(response.results)
    }

    /// Look up one place by id, requesting only `fields`.
    pub async fn place_details(&self, place_id: &str, fields: &[&str]) -> Result<PlaceDetails> {
        let url = format!("{}/details/json", self.base_url);
        let fields = fields.join(",");
        let params = [
            ("place_id", place_id),
            ("fields", fields.as_str()),
            ("key", self.api_key.as_str()),
        ];

        tracing::debug!(place_id, "Places details lookup");
        let response: DetailsResponse = self.get_json(&url, &params).await?;
        check_status(&response.status, response.error_message)?;

        Ok(response.result.unwrap_or_default())
    }

    /// Build the fetchable URL for a photo reference.
    pub fn photo_url(&self, photo_reference: &str) -> String {
        let base = format!("{}/photo", self.base_url);
        let max_width = PHOTO_MAX_WIDTH.to_string();
        let params = [
            ("maxwidth", max_width.as_str()),
            ("photo_reference", photo_reference),
            ("key", self.api_key.as_str()),
        ];

        reqwest::Url::parse_with_params(&base, &params)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| {
                format!(
                    "{}?maxwidth={}&photo_reference={}&key={}",
                    base, max_width, photo_reference, self.api_key
                )
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, params: &[(&str, &str)]) -> Result<T> {
        let resp = self.client.get(url).query(params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn check_status(status: &str, message: Option<String>) -> Result<()> {
    match status {
        OK | ZERO_RESULTS => Ok(()),
        other => Err(PlacesError::Status {
            status: other.to_string(),
            message,
        }),
    }
}
