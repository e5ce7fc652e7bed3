// Places API - Core
//
// Discovers points of interest for a destination, enriches the most
// promising ones with provider details and website content, and stores the
// result in Postgres.
//
// Pipeline activities live in domains/places/activities/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
