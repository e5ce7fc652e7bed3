use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;

use super::candidate::{Candidate, PlaceDetailsData, WebsiteContent};
use crate::common::PlaceId;

/// Persisted place row. `details` and `website_content` are stored as JSONB.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Place {
    pub id: PlaceId,
    pub external_id: String,
    pub name: String,
    pub destination: String,
    pub category: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub details: Json<PlaceDetailsData>,
    pub website_url: Option<String>,
    pub website_content: Json<WebsiteContent>,
    pub image_urls: Vec<String>,
    pub is_local_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read filter for the place listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceFilter {
    pub destination: Option<String>,
    pub category: Option<String>,
    pub limit: i64,
}

impl Place {
    /// Build the row a candidate becomes once stored.
    pub fn from_candidate(id: PlaceId, candidate: &Candidate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            external_id: candidate.external_id.clone(),
            name: candidate.name.clone(),
            destination: candidate.destination.clone(),
            category: candidate.category.clone(),
            latitude: candidate.location.map(|point| point.lat),
            longitude: candidate.location.map(|point| point.lng),
            details: Json(candidate.details.clone()),
            website_url: candidate.website_url.clone(),
            website_content: Json(candidate.website_content.clone()),
            image_urls: candidate.image_urls.clone(),
            is_local_favorite: candidate.is_local_favorite,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rating(&self) -> Option<f64> {
        self.details.rating
    }

    pub async fn find_by_id(id: PlaceId, pool: &PgPool) -> Result<Option<Self>> {
        let place = sqlx::query_as::<_, Self>("SELECT * FROM places WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(place)
    }

    pub async fn find_by_external_id(external_id: &str, pool: &PgPool) -> Result<Option<Self>> {
        let place = sqlx::query_as::<_, Self>("SELECT * FROM places WHERE external_id = $1")
            .bind(external_id)
            .fetch_optional(pool)
            .await?;
        Ok(place)
    }

    /// Highest rated first; unrated places sink to the bottom.
    pub async fn find_filtered(filter: &PlaceFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let places = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM places
            WHERE ($1::text IS NULL OR destination = $1)
              AND ($2::text IS NULL OR category = $2)
            ORDER BY (details->>'rating')::float8 DESC NULLS LAST, name ASC
            LIMIT $3
            "#,
        )
        .bind(filter.destination.as_deref())
        .bind(filter.category.as_deref())
        .bind(filter.limit)
        .fetch_all(pool)
        .await?;
        Ok(places)
    }

    pub async fn count_by_destination(destination: &str, pool: &PgPool) -> Result<i64> {
        let (count,) =
            sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM places WHERE destination = $1")
                .bind(destination)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Insert-or-update every candidate keyed by external_id, all in one
    /// transaction. Nothing is committed if any row fails.
    pub async fn upsert_batch(candidates: &[Candidate], pool: &PgPool) -> Result<usize> {
        let mut tx = pool.begin().await?;
        let mut written = 0usize;

        for candidate in candidates {
            let result = sqlx::query(
                r#"
                INSERT INTO places (
                    external_id, name, destination, category, latitude, longitude,
                    details, website_url, website_content, image_urls, is_local_favorite
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                ON CONFLICT (external_id) DO UPDATE SET
                    name = EXCLUDED.name,
                    destination = EXCLUDED.destination,
                    category = EXCLUDED.category,
                    latitude = EXCLUDED.latitude,
                    longitude = EXCLUDED.longitude,
                    details = EXCLUDED.details,
                    website_url = EXCLUDED.website_url,
                    website_content = EXCLUDED.website_content,
                    image_urls = EXCLUDED.image_urls,
                    is_local_favorite = EXCLUDED.is_local_favorite,
                    updated_at = NOW()
                "#,
            )
            .bind(&candidate.external_id)
            .bind(&candidate.name)
            .bind(&candidate.destination)
            .bind(&candidate.category)
            .bind(candidate.location.map(|point| point.lat))
            .bind(candidate.location.map(|point| point.lng))
            .bind(Json(&candidate.details))
            .bind(candidate.website_url.as_deref())
            .bind(Json(&candidate.website_content))
            .bind(&candidate.image_urls)
            .bind(candidate.is_local_favorite)
            .execute(&mut *tx)
            .await?;

            written += result.rows_affected() as usize;
        }

        tx.commit().await?;
        Ok(written)
    }
}
