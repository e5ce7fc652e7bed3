// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Pipeline logic (fetch, enrich, scrape, persist) lives in domains/places and
// talks to the outside world only through these traits.
//
// Naming convention: Base* for trait names (e.g., BasePlaceProvider, BasePlaceStore)

use anyhow::Result;
use async_trait::async_trait;
use places_client::{PlaceDetails, PlaceSummary};

use crate::common::PlaceId;
use crate::domains::places::models::{Candidate, Place, PlaceFilter};

// =============================================================================
// Place Provider Trait (search + details + photos)
// =============================================================================

#[async_trait]
pub trait BasePlaceProvider: Send + Sync {
    /// Free-text search filtered to one place type.
    async fn text_search(&self, query: &str, place_type: &str) -> Result<Vec<PlaceSummary>>;

    /// Extended record for one place, restricted to `fields`.
    async fn place_details(&self, external_id: &str, fields: &[&str]) -> Result<PlaceDetails>;

    /// Fetchable URL for a photo reference.
    fn photo_url(&self, photo_reference: &str) -> String;
}

// =============================================================================
// Page Fetcher Trait (HTTP GET with timeout + redirects)
// =============================================================================

/// Raw result of fetching a page. Non-success statuses are returned, not raised.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

// =============================================================================
// Content Extractor Trait (markup -> readable text)
// =============================================================================

pub trait BaseContentExtractor: Send + Sync {
    /// Readable main text of a page, or None when nothing readable is left
    /// after stripping boilerplate.
    fn extract_text(&self, html: &str) -> Option<String>;
}

// =============================================================================
// Place Store Trait (persistence)
// =============================================================================

#[async_trait]
pub trait BasePlaceStore: Send + Sync {
    /// Upsert all candidates by external_id as one unit. Returns rows written.
    async fn upsert_places(&self, places: &[Candidate]) -> Result<usize>;

    async fn list_places(&self, filter: &PlaceFilter) -> Result<Vec<Place>>;

    async fn find_place(&self, id: PlaceId) -> Result<Option<Place>>;
}
