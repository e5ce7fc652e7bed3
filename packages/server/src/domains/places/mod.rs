pub mod activities;
pub mod categories;
pub mod data;
pub mod error;
pub mod models;

pub use activities::{seed_destination, SeedOptions, SeedOutcome};
pub use categories::{default_categories, PlaceCategory};
pub use data::{ListPlacesQuery, SeedRequest, SeedResponse};
pub use error::SeedError;
pub use models::{Candidate, Place, PlaceFilter};
