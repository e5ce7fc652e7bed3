pub mod candidate;
pub mod place;

pub use candidate::{
    is_local_favorite, Candidate, GeoPoint, PlaceDetailsData, PriceRange, ReviewSnippet,
    WebsiteContent, MAX_IMAGE_URLS,
};
pub use place::{Place, PlaceFilter};
