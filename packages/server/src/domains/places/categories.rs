//! Category taxonomy used to fan out discovery queries.
//!
//! Order matters: when two categories return the same place, the category
//! listed first keeps it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceCategory {
    /// Label stored on every place found through this category.
    pub label: String,
    /// Provider place types, queried in order.
    pub place_types: Vec<String>,
}

impl PlaceCategory {
    pub fn new(label: impl Into<String>, place_types: &[&str]) -> Self {
        Self {
            label: label.into(),
            place_types: place_types.iter().map(|t| t.to_string()).collect(),
        }
    }
}

pub const FOOD_AND_DRINK: &str = "Food & Drink";
pub const ADVENTURE: &str = "Adventure";
pub const RELAXATION: &str = "Relaxation";
pub const OBSERVATION: &str = "Observation";

pub fn default_categories() -> Vec<PlaceCategory> {
    vec![
        PlaceCategory::new(FOOD_AND_DRINK, &["restaurant", "cafe", "bar", "bakery"]),
        PlaceCategory::new(
            ADVENTURE,
            &["tourist_attraction", "museum", "amusement_park", "zoo"],
        ),
        PlaceCategory::new(RELAXATION, &["park", "spa"]),
        PlaceCategory::new(OBSERVATION, &["point_of_interest"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories_order() {
        let labels: Vec<_> = default_categories().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec![FOOD_AND_DRINK, ADVENTURE, RELAXATION, OBSERVATION]);
    }

    #[test]
    fn test_every_category_has_place_types() {
        assert!(default_categories().iter().all(|c| !c.place_types.is_empty()));
    }
}
