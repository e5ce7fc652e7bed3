use serde::{Deserialize, Serialize};

/// Hard cap on stored image URLs per place.
pub const MAX_IMAGE_URLS: usize = 10;

/// A place is a local favorite when it is both highly rated and widely reviewed.
pub const LOCAL_FAVORITE_MIN_RATING: f64 = 4.5;
pub const LOCAL_FAVORITE_MIN_REVIEWS: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Structured provider data for a place.
///
/// The first block is filled from search results; the second only when the
/// place was selected for enrichment and its detail lookup succeeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceDetailsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opening_hours: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editorial_summary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<ReviewSnippet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSnippet {
    pub text: String,
    pub rating: Option<f64>,
}

/// Price tier inferred from a place's own website.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Expensive,
}

/// Marketing signals scraped from a place's website. The default value is
/// the "nothing found" result and serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub menu_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vibe_keywords: Vec<String>,
}

impl WebsiteContent {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.menu_keywords.is_empty()
            && self.price_range.is_none()
            && self.vibe_keywords.is_empty()
    }
}

/// A place record before or during enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Provider-assigned id, unique within a run and the store's upsert key.
    pub external_id: String,
    pub name: String,
    pub destination: String,
    pub category: String,
    pub location: Option<GeoPoint>,
    pub details: PlaceDetailsData,
    pub website_url: Option<String>,
    pub website_content: WebsiteContent,
    pub image_urls: Vec<String>,
    /// Fixed when the candidate is first built.
    pub is_local_favorite: bool,
}

impl Candidate {
    /// Ranking score: rating x review count, missing values count as zero.
    pub fn score(&self) -> f64 {
        let rating = self.details.rating.unwrap_or(0.0);
        let reviews = self.details.review_count.unwrap_or(0) as f64;
        rating * reviews
    }

    /// Append an image URL, keeping insertion order, skipping duplicates and
    /// stopping at [`MAX_IMAGE_URLS`]. Returns whether the URL was added.
    pub fn push_image_url(&mut self, url: String) -> bool {
        if self.image_urls.len() >= MAX_IMAGE_URLS || self.image_urls.contains(&url) {
            return false;
        }
        self.image_urls.push(url);
        true
    }
}

pub fn is_local_favorite(rating: Option<f64>, review_count: Option<i64>) -> bool {
    matches!(
        (rating, review_count),
        (Some(rating), Some(reviews))
            if rating >= LOCAL_FAVORITE_MIN_RATING && reviews >= LOCAL_FAVORITE_MIN_REVIEWS
    )
}

#[cfg(test)]
pub(crate) fn candidate(external_id: &str, rating: Option<f64>, reviews: Option<i64>) -> Candidate {
    Candidate {
        external_id: external_id.to_string(),
        name: format!("Place {}", external_id),
        destination: "Tokyo".to_string(),
        category: "Food & Drink".to_string(),
        location: None,
        details: PlaceDetailsData {
            rating,
            review_count: reviews,
            ..Default::default()
        },
        website_url: None,
        website_content: WebsiteContent::default(),
        image_urls: Vec::new(),
        is_local_favorite: is_local_favorite(rating, reviews),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_favorite_thresholds() {
        assert!(is_local_favorite(Some(4.5), Some(500)));
        assert!(!is_local_favorite(Some(4.5), Some(499)));
        assert!(!is_local_favorite(Some(4.4), Some(10_000)));
        assert!(!is_local_favorite(None, Some(10_000)));
        assert!(!is_local_favorite(Some(5.0), None));
    }

    #[test]
    fn test_score() {
        assert_eq!(candidate("a", Some(5.0), Some(1000)).score(), 5000.0);
        assert_eq!(candidate("b", Some(4.0), Some(2000)).score(), 8000.0);
        assert_eq!(candidate("c", None, Some(2000)).score(), 0.0);
        assert_eq!(candidate("d", Some(4.0), None).score(), 0.0);
    }

    #[test]
    fn test_push_image_url_dedups() {
        let mut place = candidate("a", None, None);
        assert!(place.push_image_url("https://img/1".into()));
        assert!(!place.push_image_url("https://img/1".into()));
        assert_eq!(place.image_urls, vec!["https://img/1"]);
    }

    #[test]
    fn test_push_image_url_caps_and_keeps_order() {
        let mut place = candidate("a", None, None);
        for i in 0..25 {
            place.push_image_url(format!("https://img/{}", i));
        }
        assert_eq!(place.image_urls.len(), MAX_IMAGE_URLS);
        assert_eq!(place.image_urls.first().map(String::as_str), Some("https://img/0"));
        assert_eq!(place.image_urls.last().map(String::as_str), Some("https://img/9"));
    }

    #[test]
    fn test_empty_website_content_serializes_to_empty_object() {
        let json = serde_json::to_value(WebsiteContent::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
        let back: WebsiteContent = serde_json::from_value(json).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_price_range_serializes_as_symbols() {
        let content = WebsiteContent {
            price_range: Some(PriceRange::Expensive),
            ..Default::default()
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json, serde_json::json!({"price_range": "$$$"}));
    }
}
