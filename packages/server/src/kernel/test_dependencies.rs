// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use places_client::{PlaceDetails, PlaceSummary};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{
    BaseContentExtractor, BasePageFetcher, BasePlaceProvider, BasePlaceStore, FetchedPage,
    ServerDeps,
};
use crate::common::PlaceId;
use crate::domains::places::models::{Candidate, Place, PlaceFilter};

// =============================================================================
// Mock Place Provider
// =============================================================================

/// Arguments captured from a text search call
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCallArgs {
    pub query: String,
    pub place_type: String,
}

pub struct MockPlaceProvider {
    search_results: Arc<Mutex<HashMap<String, Vec<PlaceSummary>>>>,
    search_delays: Arc<Mutex<HashMap<String, Duration>>>,
    failing_queries: Arc<Mutex<HashSet<String>>>,
    panicking_queries: Arc<Mutex<HashSet<String>>>,
    details: Arc<Mutex<HashMap<String, PlaceDetails>>>,
    failing_details: Arc<Mutex<HashSet<String>>>,
    search_calls: Arc<Mutex<Vec<SearchCallArgs>>>,
    detail_calls: Arc<Mutex<Vec<String>>>,
}

impl MockPlaceProvider {
    pub fn new() -> Self {
        Self {
            search_results: Arc::new(Mutex::new(HashMap::new())),
            search_delays: Arc::new(Mutex::new(HashMap::new())),
            failing_queries: Arc::new(Mutex::new(HashSet::new())),
            panicking_queries: Arc::new(Mutex::new(HashSet::new())),
            details: Arc::new(Mutex::new(HashMap::new())),
            failing_details: Arc::new(Mutex::new(HashSet::new())),
            search_calls: Arc::new(Mutex::new(Vec::new())),
            detail_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Results returned for an exact query string, e.g. "cafe in Tokyo".
    /// Unknown queries return no results.
    pub fn with_search_results(self, query: &str, results: Vec<PlaceSummary>) -> Self {
        self.search_results
            .lock()
            .unwrap()
            .insert(query.to_string(), results);
        self
    }

    /// Delay the response for a query, to shuffle completion order.
    pub fn with_search_delay(self, query: &str, delay: Duration) -> Self {
        self.search_delays
            .lock()
            .unwrap()
            .insert(query.to_string(), delay);
        self
    }

    pub fn with_failing_query(self, query: &str) -> Self {
        self.failing_queries
            .lock()
            .unwrap()
            .insert(query.to_string());
        self
    }

    /// Panic inside the search call, killing whichever task issued it
    pub fn with_panicking_query(self, query: &str) -> Self {
        self.panicking_queries
            .lock()
            .unwrap()
            .insert(query.to_string());
        self
    }

    /// Details returned for an external id. Unknown ids return an empty record.
    pub fn with_details(self, external_id: &str, details: PlaceDetails) -> Self {
        self.details
            .lock()
            .unwrap()
            .insert(external_id.to_string(), details);
        self
    }

    pub fn with_failing_details(self, external_id: &str) -> Self {
        self.failing_details
            .lock()
            .unwrap()
            .insert(external_id.to_string());
        self
    }

    /// Get all text searches that were issued
    pub fn search_calls(&self) -> Vec<SearchCallArgs> {
        self.search_calls.lock().unwrap().clone()
    }

    /// Get every external id a detail lookup was issued for
    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }

    pub fn was_searched(&self, query: &str) -> bool {
        self.search_calls
            .lock()
            .unwrap()
            .iter()
            .any(|call| call.query == query)
    }
}

impl Default for MockPlaceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePlaceProvider for MockPlaceProvider {
    async fn text_search(&self, query: &str, place_type: &str) -> Result<Vec<PlaceSummary>> {
        self.search_calls.lock().unwrap().push(SearchCallArgs {
            query: query.to_string(),
            place_type: place_type.to_string(),
        });

        let delay = self.search_delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let panics = self.panicking_queries.lock().unwrap().contains(query);
        if panics {
            panic!("mock search panic for '{}'", query);
        }

        if self.failing_queries.lock().unwrap().contains(query) {
            return Err(anyhow!("mock search failure for '{}'", query));
        }

        Ok(self
            .search_results
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }

    async fn place_details(&self, external_id: &str, _fields: &[&str]) -> Result<PlaceDetails> {
        self.detail_calls
            .lock()
            .unwrap()
            .push(external_id.to_string());

        if self.failing_details.lock().unwrap().contains(external_id) {
            return Err(anyhow!("mock details failure for '{}'", external_id));
        }

        Ok(self
            .details
            .lock()
            .unwrap()
            .get(external_id)
            .cloned()
            .unwrap_or_default())
    }

    fn photo_url(&self, photo_reference: &str) -> String {
        format!("https://photos.test/{}", photo_reference)
    }
}

// =============================================================================
// Mock Page Fetcher
// =============================================================================

pub struct MockPageFetcher {
    pages: Arc<Mutex<HashMap<String, FetchedPage>>>,
    failing_urls: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self {
            pages: Arc::new(Mutex::new(HashMap::new())),
            failing_urls: Arc::new(Mutex::new(HashSet::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serve `body` with a 200 status at `url`.
    pub fn with_page(self, url: &str, body: &str) -> Self {
        self.with_status(url, 200, body)
    }

    pub fn with_status(self, url: &str, status: u16, body: &str) -> Self {
        self.pages.lock().unwrap().insert(
            url.to_string(),
            FetchedPage {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// Fail the fetch outright, like a timeout or connection reset.
    pub fn with_failure(self, url: &str) -> Self {
        self.failing_urls.lock().unwrap().insert(url.to_string());
        self
    }

    /// Get all URLs that were fetched
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_fetched(&self, url: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|u| u == url)
    }
}

impl Default for MockPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        self.calls.lock().unwrap().push(url.to_string());

        if self.failing_urls.lock().unwrap().contains(url) {
            return Err(anyhow!("mock fetch failure for {}", url));
        }

        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or(FetchedPage {
                status: 404,
                body: String::new(),
            }))
    }
}

// =============================================================================
// Mock Content Extractor
// =============================================================================

/// Treats page bodies as already-readable text. Blank bodies, and bodies
/// registered with `with_unreadable`, yield nothing.
pub struct MockContentExtractor {
    unreadable: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockContentExtractor {
    pub fn new() -> Self {
        Self {
            unreadable: Arc::new(Mutex::new(HashSet::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_unreadable(self, body: &str) -> Self {
        self.unreadable.lock().unwrap().insert(body.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseContentExtractor for MockContentExtractor {
    fn extract_text(&self, html: &str) -> Option<String> {
        self.calls.lock().unwrap().push(html.to_string());

        if self.unreadable.lock().unwrap().contains(html) {
            return None;
        }

        let text = html.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

// =============================================================================
// In-memory Place Store
// =============================================================================

/// Keeps places in a map keyed by external id. Ids and creation times stay
/// stable across upserts, mirroring the Postgres store.
pub struct InMemoryPlaceStore {
    places: Arc<Mutex<HashMap<String, Place>>>,
    fail_writes: bool,
    upsert_calls: Arc<Mutex<Vec<Vec<Candidate>>>>,
}

impl InMemoryPlaceStore {
    pub fn new() -> Self {
        Self {
            places: Arc::new(Mutex::new(HashMap::new())),
            fail_writes: false,
            upsert_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Reject every write, leaving the store untouched.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    /// Snapshot of stored places, sorted by external id.
    pub fn places(&self) -> Vec<Place> {
        let mut places: Vec<Place> = self.places.lock().unwrap().values().cloned().collect();
        places.sort_by(|a, b| a.external_id.cmp(&b.external_id));
        places
    }

    pub fn get(&self, external_id: &str) -> Option<Place> {
        self.places.lock().unwrap().get(external_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.places.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every batch handed to `upsert_places`, in call order.
    pub fn upsert_calls(&self) -> Vec<Vec<Candidate>> {
        self.upsert_calls.lock().unwrap().clone()
    }
}

impl Default for InMemoryPlaceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePlaceStore for InMemoryPlaceStore {
    async fn upsert_places(&self, places: &[Candidate]) -> Result<usize> {
        self.upsert_calls.lock().unwrap().push(places.to_vec());

        if self.fail_writes {
            return Err(anyhow!("mock store write failure"));
        }

        let now = Utc::now();
        let mut stored = self.places.lock().unwrap();
        for candidate in places {
            let mut row = Place::from_candidate(PlaceId::new(), candidate, now);
            if let Some(existing) = stored.get(&candidate.external_id) {
                row.id = existing.id;
                row.created_at = existing.created_at;
            }
            stored.insert(candidate.external_id.clone(), row);
        }

        Ok(places.len())
    }

    async fn list_places(&self, filter: &PlaceFilter) -> Result<Vec<Place>> {
        let mut places: Vec<Place> = self
            .places
            .lock()
            .unwrap()
            .values()
            .filter(|p| {
                filter
                    .destination
                    .as_deref()
                    .map_or(true, |d| p.destination == d)
            })
            .filter(|p| filter.category.as_deref().map_or(true, |c| p.category == c))
            .cloned()
            .collect();

        places.sort_by(|a, b| match (a.rating(), b.rating()) {
            (Some(x), Some(y)) => y
                .partial_cmp(&x)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.name.cmp(&b.name),
        });
        places.truncate(filter.limit.max(0) as usize);

        Ok(places)
    }

    async fn find_place(&self, id: PlaceId) -> Result<Option<Place>> {
        Ok(self
            .places
            .lock()
            .unwrap()
            .values()
            .find(|p| p.id == id)
            .cloned())
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub place_provider: Option<Arc<MockPlaceProvider>>,
    pub page_fetcher: Arc<MockPageFetcher>,
    pub content_extractor: Arc<MockContentExtractor>,
    pub place_store: Option<Arc<InMemoryPlaceStore>>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            place_provider: Some(Arc::new(MockPlaceProvider::new())),
            page_fetcher: Arc::new(MockPageFetcher::new()),
            content_extractor: Arc::new(MockContentExtractor::new()),
            place_store: Some(Arc::new(InMemoryPlaceStore::new())),
        }
    }

    /// Set a mock place provider
    pub fn mock_provider(mut self, provider: MockPlaceProvider) -> Self {
        self.place_provider = Some(Arc::new(provider));
        self
    }

    /// Simulate a missing provider API key
    pub fn without_provider(mut self) -> Self {
        self.place_provider = None;
        self
    }

    /// Set a mock page fetcher
    pub fn mock_fetcher(mut self, fetcher: MockPageFetcher) -> Self {
        self.page_fetcher = Arc::new(fetcher);
        self
    }

    /// Set a mock content extractor
    pub fn mock_extractor(mut self, extractor: MockContentExtractor) -> Self {
        self.content_extractor = Arc::new(extractor);
        self
    }

    /// Set the place store
    pub fn mock_store(mut self, store: InMemoryPlaceStore) -> Self {
        self.place_store = Some(Arc::new(store));
        self
    }

    /// Simulate a missing store connection
    pub fn without_store(mut self) -> Self {
        self.place_store = None;
        self
    }

    /// Convert into ServerDeps, keeping handles on the mocks for assertions
    pub fn build_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.place_provider
                .clone()
                .map(|p| p as Arc<dyn BasePlaceProvider>),
            self.page_fetcher.clone(),
            self.content_extractor.clone(),
            self.place_store
                .clone()
                .map(|s| s as Arc<dyn BasePlaceStore>),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
