use thiserror::Error;

/// Errors a seed caller can see. Provider and extraction failures never get
/// here; they are absorbed into empty results at the subtask that hit them.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A required collaborator was not configured. Raised before any work.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The store rejected the batch write. Nothing was committed.
    #[error("failed to persist places: {0}")]
    Persistence(#[source] anyhow::Error),
}
