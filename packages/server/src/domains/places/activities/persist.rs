//! Persist activity - one batch upsert for the whole run.

use tracing::{error, info};

use crate::domains::places::error::SeedError;
use crate::domains::places::models::Candidate;
use crate::kernel::BasePlaceStore;

/// Upsert every candidate by external id in a single unit of work and return
/// the number of rows the store confirmed. A store failure is fatal.
pub async fn persist_places(
    candidates: &[Candidate],
    store: &dyn BasePlaceStore,
) -> Result<usize, SeedError> {
    if candidates.is_empty() {
        info!("No places to persist");
        return Ok(0);
    }

    match store.upsert_places(candidates).await {
        Ok(written) => {
            info!(count = candidates.len(), written, "Persisted places");
            Ok(written)
        }
        Err(e) => {
            error!(count = candidates.len(), error = %e, "Failed to persist places");
            Err(SeedError::Persistence(e))
        }
    }
}
