//! Postgres-backed place store.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::BasePlaceStore;
use crate::common::PlaceId;
use crate::domains::places::models::{Candidate, Place, PlaceFilter};

#[derive(Clone)]
pub struct PostgresPlaceStore {
    pool: PgPool,
}

impl PostgresPlaceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BasePlaceStore for PostgresPlaceStore {
    async fn upsert_places(&self, places: &[Candidate]) -> Result<usize> {
        Place::upsert_batch(places, &self.pool).await
    }

    async fn list_places(&self, filter: &PlaceFilter) -> Result<Vec<Place>> {
        Place::find_filtered(filter, &self.pool).await
    }

    async fn find_place(&self, id: PlaceId) -> Result<Option<Place>> {
        Place::find_by_id(id, &self.pool).await
    }
}
