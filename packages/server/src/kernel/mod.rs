//! Kernel module - server infrastructure and dependencies.

pub mod content_extractor;
pub mod deps;
pub mod page_fetcher;
pub mod place_store;
pub mod places_provider;
pub mod test_dependencies;
pub mod traits;

pub use content_extractor::ReadableTextExtractor;
pub use deps::ServerDeps;
pub use page_fetcher::{HttpPageFetcher, PAGE_FETCH_TIMEOUT};
pub use place_store::PostgresPlaceStore;
pub use places_provider::GooglePlacesProvider;
pub use test_dependencies::TestDependencies;
pub use traits::*;
