//! Seed a destination - discovery, ranking, enrichment and persistence.
//!
//! Pipeline:
//! 1. Fetch every configured category concurrently
//! 2. Dedup across categories (earliest configured category wins)
//! 3. Rank by rating x review count
//! 4. Select the top K for enrichment
//! 5. Detail lookups for the top K, concurrently
//! 6. Website scrapes for the top K, concurrently
//! 7. Merge: enriched top K, then the rest in dedup order
//! 8. Persist as one batch
//!
//! Concurrent batches spawn one task per member and join them in submission
//! order. A failed member degrades only itself; all merging happens here on
//! the coordinating task.

use futures::future::join_all;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

use super::enrich_details::{enrich_details, DetailEnrichment};
use super::fetch_category::fetch_category;
use super::persist::persist_places;
use super::scrape_website::scrape_website;
use crate::domains::places::categories::{default_categories, PlaceCategory};
use crate::domains::places::error::SeedError;
use crate::domains::places::models::{Candidate, WebsiteContent};
use crate::kernel::{BasePlaceProvider, ServerDeps};

/// Candidates enriched per run.
pub const DEFAULT_ENRICHMENT_LIMIT: usize = 20;

#[derive(Debug, Clone)]
pub struct SeedOptions {
    /// Taxonomy to fan out over. Order is the dedup tie-break order.
    pub categories: Vec<PlaceCategory>,
    pub enrichment_limit: usize,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            enrichment_limit: DEFAULT_ENRICHMENT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeedOutcome {
    pub destination: String,
    /// Rows the store confirmed writing.
    pub places_added: usize,
    /// Unique candidates after dedup.
    pub candidates_found: usize,
    /// Candidates selected for enrichment.
    pub enriched: usize,
}

pub async fn seed_destination(
    destination: &str,
    options: &SeedOptions,
    deps: &ServerDeps,
) -> Result<SeedOutcome, SeedError> {
    let provider = deps.place_provider.clone().ok_or_else(|| {
        SeedError::Configuration("place search provider is not configured".to_string())
    })?;
    let store = deps
        .place_store
        .clone()
        .ok_or_else(|| SeedError::Configuration("place store is not configured".to_string()))?;

    info!(destination = %destination, categories = options.categories.len(), "Seeding destination");

    let per_category = fetch_all_categories(destination, &options.categories, &provider).await;
    let unique = dedup_candidates(per_category);
    let ranked = rank_candidates(&unique);

    let top: Vec<Candidate> = ranked
        .into_iter()
        .take(options.enrichment_limit)
        .collect();
    let enriched_count = top.len();

    info!(
        destination = %destination,
        candidates = unique.len(),
        enriching = enriched_count,
        "Ranked candidates"
    );

    let top = enrich_top_candidates(top, &provider).await;
    let top = scrape_top_candidates(top, deps).await;

    let places = merge_results(top, unique.clone());
    let places_added = persist_places(&places, store.as_ref()).await?;

    info!(destination = %destination, places_added, "Seed complete");

    Ok(SeedOutcome {
        destination: destination.to_string(),
        places_added,
        candidates_found: unique.len(),
        enriched: enriched_count,
    })
}

/// One task per category; results come back in configured order. A task
/// that died counts as an empty category.
async fn fetch_all_categories(
    destination: &str,
    categories: &[PlaceCategory],
    provider: &Arc<dyn BasePlaceProvider>,
) -> Vec<Vec<Candidate>> {
    let handles: Vec<_> = categories
        .iter()
        .cloned()
        .map(|category| {
            let provider = provider.clone();
            let destination = destination.to_string();
            tokio::spawn(async move {
                fetch_category(&destination, &category, provider.as_ref()).await
            })
        })
        .collect();

    join_all(handles)
        .await
        .into_iter()
        .zip(categories)
        .map(|(outcome, category)| {
            outcome.unwrap_or_else(|e| {
                warn!(category = %category.label, error = %e, "Category fetch task failed");
                Vec::new()
            })
        })
        .collect()
}

/// Flatten per-category lists in order, keeping the first occurrence of
/// each external id.
pub fn dedup_candidates(per_category: Vec<Vec<Candidate>>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    per_category
        .into_iter()
        .flatten()
        .filter(|candidate| seen.insert(candidate.external_id.clone()))
        .collect()
}

/// Stable sort by descending score; equal scores keep dedup order.
pub fn rank_candidates(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
    ranked
}

async fn enrich_top_candidates(
    mut top: Vec<Candidate>,
    provider: &Arc<dyn BasePlaceProvider>,
) -> Vec<Candidate> {
    let handles: Vec<_> = top
        .iter()
        .map(|candidate| {
            let provider = provider.clone();
            let external_id = candidate.external_id.clone();
            tokio::spawn(async move { enrich_details(&external_id, provider.as_ref()).await })
        })
        .collect();

    let outcomes: Vec<Option<DetailEnrichment>> = join_all(handles)
        .await
        .into_iter()
        .map(|outcome| {
            outcome.unwrap_or_else(|e| {
                warn!(error = %e, "Detail enrichment task failed");
                None
            })
        })
        .collect();

    for (candidate, enrichment) in top.iter_mut().zip(outcomes) {
        if let Some(enrichment) = enrichment {
            enrichment.apply(candidate);
        }
    }

    top
}

async fn scrape_top_candidates(mut top: Vec<Candidate>, deps: &ServerDeps) -> Vec<Candidate> {
    let handles: Vec<_> = top
        .iter()
        .map(|candidate| {
            let fetcher = deps.page_fetcher.clone();
            let extractor = deps.content_extractor.clone();
            let url = candidate.website_url.clone();
            tokio::spawn(async move {
                scrape_website(url.as_deref(), fetcher.as_ref(), extractor.as_ref()).await
            })
        })
        .collect();

    let outcomes: Vec<WebsiteContent> = join_all(handles)
        .await
        .into_iter()
        .map(|outcome| {
            outcome.unwrap_or_else(|e| {
                warn!(error = %e, "Website scrape task failed");
                WebsiteContent::default()
            })
        })
        .collect();

    for (candidate, content) in top.iter_mut().zip(outcomes) {
        candidate.website_content = content;
    }

    top
}

/// Enriched top K in selection order, then every other unique candidate in
/// dedup order.
pub fn merge_results(top: Vec<Candidate>, unique: Vec<Candidate>) -> Vec<Candidate> {
    let selected: HashSet<String> = top.iter().map(|c| c.external_id.clone()).collect();
    let mut merged = top;
    merged.extend(
        unique
            .into_iter()
            .filter(|candidate| !selected.contains(&candidate.external_id)),
    );
    merged
}
