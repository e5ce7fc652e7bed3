//! Server dependencies for the seeding pipeline and HTTP handlers
//!
//! Every external service sits behind a Base* trait so tests can swap in the
//! mocks from `test_dependencies`.

use std::sync::Arc;

use crate::kernel::{BaseContentExtractor, BasePageFetcher, BasePlaceProvider, BasePlaceStore};

// =============================================================================
// ServerDeps
// =============================================================================

#[derive(Clone)]
pub struct ServerDeps {
    /// Place search/details provider. `None` when no API key is configured;
    /// seeding refuses to run without it.
    pub place_provider: Option<Arc<dyn BasePlaceProvider>>,
    pub page_fetcher: Arc<dyn BasePageFetcher>,
    pub content_extractor: Arc<dyn BaseContentExtractor>,
    /// Persistence target. `None` leaves the read routes and seeding unavailable.
    pub place_store: Option<Arc<dyn BasePlaceStore>>,
}

impl ServerDeps {
    pub fn new(
        place_provider: Option<Arc<dyn BasePlaceProvider>>,
        page_fetcher: Arc<dyn BasePageFetcher>,
        content_extractor: Arc<dyn BaseContentExtractor>,
        place_store: Option<Arc<dyn BasePlaceStore>>,
    ) -> Self {
        Self {
            place_provider,
            page_fetcher,
            content_extractor,
            place_store,
        }
    }

    pub fn provider_configured(&self) -> bool {
        self.place_provider.is_some()
    }

    pub fn store_configured(&self) -> bool {
        self.place_store.is_some()
    }
}
