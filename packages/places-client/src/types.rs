use serde::Deserialize;

/// Envelope for `textsearch/json`.
#[derive(Debug, Clone, Deserialize)]
pub struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
    pub error_message: Option<String>,
}

/// Envelope for `details/json`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    pub result: Option<PlaceDetails>,
    pub error_message: Option<String>,
}

/// A single text search hit. Every field is optional; the provider omits
/// whatever it does not know about a place.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceSummary {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub geometry: Option<Geometry>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<i64>,
    pub price_level: Option<i32>,
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub business_status: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geometry {
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Photo {
    pub photo_reference: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Extended record returned by a details lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    pub website: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    pub editorial_summary: Option<EditorialSummary>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl PlaceDetails {
    /// True when the lookup carried none of the requested fields.
    pub fn is_empty(&self) -> bool {
        self.website.is_none()
            && self.formatted_phone_number.is_none()
            && self.opening_hours.is_none()
            && self.editorial_summary.is_none()
            && self.reviews.is_empty()
            && self.photos.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditorialSummary {
    pub overview: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub author_name: Option<String>,
    pub rating: Option<f64>,
    pub text: Option<String>,
    pub relative_time_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_search_tolerates_missing_fields() {
        let json = r#"{
            "status": "OK",
            "results": [
                {
                    "place_id": "abc",
                    "name": "Afuri",
                    "geometry": {"location": {"lat": 35.658, "lng": 139.7016}},
                    "rating": 4.6,
                    "user_ratings_total": 4250,
                    "types": ["restaurant", "food"],
                    "photos": [{"photo_reference": "ref-1", "width": 800}]
                },
                {"name": "No id at all"}
            ]
        }"#;

        let response: TextSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);

        let first = &response.results[0];
        assert_eq!(first.place_id.as_deref(), Some("abc"));
        assert_eq!(first.user_ratings_total, Some(4250));
        assert_eq!(first.price_level, None);
        assert_eq!(first.photos[0].photo_reference.as_deref(), Some("ref-1"));
        assert_eq!(
            first.geometry.as_ref().and_then(|g| g.location),
            Some(LatLng {
                lat: Some(35.658),
                lng: Some(139.7016)
            })
        );

        let second = &response.results[1];
        assert!(second.place_id.is_none());
        assert!(second.types.is_empty());
    }

    #[test]
    fn test_partial_photo_and_location_keep_sibling_results() {
        let json = r#"{
            "status": "OK",
            "results": [
                {"place_id": "good", "photos": [{"photo_reference": "ref-1"}]},
                {"place_id": "no-ref", "photos": [{"width": 800}]},
                {"place_id": "half-location", "geometry": {"location": {"lat": 1.0}}}
            ]
        }"#;

        let response: TextSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 3);
        assert_eq!(response.results[0].photos[0].photo_reference.as_deref(), Some("ref-1"));
        assert!(response.results[1].photos[0].photo_reference.is_none());

        let location = response.results[2]
            .geometry
            .as_ref()
            .and_then(|g| g.location)
            .unwrap();
        assert_eq!(location.lat, Some(1.0));
        assert_eq!(location.lng, None);
    }

    #[test]
    fn test_details_photo_without_reference_still_decodes() {
        let response: DetailsResponse = serde_json::from_str(
            r#"{"status": "OK", "result": {"website": "https://afuri.com", "photos": [{"height": 600}]}}"#,
        )
        .unwrap();
        let details = response.result.unwrap();
        assert_eq!(details.website.as_deref(), Some("https://afuri.com"));
        assert!(details.photos[0].photo_reference.is_none());
    }

    #[test]
    fn test_zero_results_has_no_results_key() {
        let response: TextSearchResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS"}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_details_is_empty() {
        let response: DetailsResponse =
            serde_json::from_str(r#"{"status": "OK", "result": {}}"#).unwrap();
        assert!(response.result.unwrap().is_empty());

        let response: DetailsResponse = serde_json::from_str(
            r#"{"status": "OK", "result": {"website": "https://afuri.com"}}"#,
        )
        .unwrap();
        assert!(!response.result.unwrap().is_empty());
    }
}
