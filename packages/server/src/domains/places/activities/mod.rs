//! Place pipeline activities - discovery, enrichment, scraping and persistence.

pub mod enrich_details;
pub mod fetch_category;
pub mod persist;
pub mod scrape_website;
pub mod seed_destination;

pub use enrich_details::{enrich_details, DetailEnrichment, DETAIL_FIELDS};
pub use fetch_category::fetch_category;
pub use persist::persist_places;
pub use scrape_website::{analyze_text, scrape_website};
pub use seed_destination::{
    dedup_candidates, merge_results, rank_candidates, seed_destination, SeedOptions, SeedOutcome,
    DEFAULT_ENRICHMENT_LIMIT,
};
