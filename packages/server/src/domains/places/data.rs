//! Request and response shapes for the place routes.

use serde::{Deserialize, Serialize};

use super::activities::SeedOutcome;
use super::error::SeedError;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedRequest {
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedResponse {
    pub success: bool,
    pub message: String,
    pub places_added: usize,
    pub destination: String,
}

impl SeedResponse {
    pub fn from_outcome(outcome: &SeedOutcome) -> Self {
        Self {
            success: true,
            message: format!(
                "Seeded {} places for {}",
                outcome.places_added, outcome.destination
            ),
            places_added: outcome.places_added,
            destination: outcome.destination.clone(),
        }
    }

    pub fn from_error(destination: &str, error: &SeedError) -> Self {
        Self::failure(destination, error.to_string())
    }

    pub fn failure(destination: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            places_added: 0,
            destination: destination.to_string(),
        }
    }
}

/// Query string of the place listing. Omitted fields fall back to
/// [`DEFAULT_LIST_LIMIT`] and no filtering.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPlacesQuery {
    pub destination: Option<String>,
    pub category: Option<String>,
    pub limit: Option<i64>,
}

pub const DEFAULT_LIST_LIMIT: i64 = 100;
pub const MAX_LIST_LIMIT: i64 = 500;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_shape() {
        let outcome = SeedOutcome {
            destination: "Tokyo".into(),
            places_added: 42,
            candidates_found: 50,
            enriched: 20,
        };
        let json = serde_json::to_value(SeedResponse::from_outcome(&outcome)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["places_added"], 42);
        assert_eq!(json["destination"], "Tokyo");
        assert_eq!(json["message"], "Seeded 42 places for Tokyo");
    }

    #[test]
    fn test_failure_response_shape() {
        let error = SeedError::Configuration("place store is not configured".into());
        let response = SeedResponse::from_error("Tokyo", &error);
        assert!(!response.success);
        assert_eq!(response.places_added, 0);
        assert!(response.message.contains("place store is not configured"));
    }
}
