//! Builders for provider responses and candidates used across tests.

use places_client::{
    EditorialSummary, OpeningHours, Photo, PlaceDetails, PlaceSummary, Review,
};
use server_core::domains::places::models::{
    is_local_favorite, Candidate, PlaceDetailsData, WebsiteContent,
};
use uuid::Uuid;

/// A destination name no other test uses, for tests sharing one database.
pub fn unique_destination(prefix: &str) -> String {
    format!("{} {}", prefix, Uuid::new_v4().simple())
}

pub fn summary(place_id: &str, name: &str, rating: Option<f64>, reviews: Option<i64>) -> PlaceSummary {
    PlaceSummary {
        place_id: Some(place_id.to_string()),
        name: Some(name.to_string()),
        rating,
        user_ratings_total: reviews,
        ..Default::default()
    }
}

pub fn with_photos(mut summary: PlaceSummary, references: &[&str]) -> PlaceSummary {
    summary.photos = references.iter().map(|r| photo(r)).collect();
    summary
}

pub fn photo(reference: &str) -> Photo {
    Photo {
        photo_reference: Some(reference.to_string()),
        width: Some(800),
        height: Some(600),
    }
}

pub fn details_with_website(website: &str) -> PlaceDetails {
    PlaceDetails {
        website: Some(website.to_string()),
        formatted_phone_number: Some("+81 3-0000-0000".to_string()),
        opening_hours: Some(OpeningHours {
            open_now: Some(true),
            weekday_text: vec!["Monday: 9:00 AM – 5:00 PM".to_string()],
        }),
        editorial_summary: Some(EditorialSummary {
            overview: Some("A neighborhood favorite.".to_string()),
            language: Some("en".to_string()),
        }),
        reviews: vec![Review {
            author_name: Some("Ken".to_string()),
            rating: Some(5.0),
            text: Some("Wonderful".to_string()),
            relative_time_description: Some("a week ago".to_string()),
        }],
        photos: vec![photo("detail-1")],
    }
}

pub fn candidate(external_id: &str, destination: &str, rating: Option<f64>, reviews: Option<i64>) -> Candidate {
    Candidate {
        external_id: external_id.to_string(),
        name: format!("Place {}", external_id),
        destination: destination.to_string(),
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
