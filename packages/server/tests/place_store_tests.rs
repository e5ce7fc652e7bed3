//! Postgres place store tests. Requires Docker for testcontainers.

mod common;

use common::*;
use server_core::domains::places::models::{
    Place, PlaceFilter, PriceRange, ReviewSnippet, WebsiteContent,
};
use server_core::kernel::BasePlaceStore;
use test_context::test_context;

fn filter(destination: &str) -> PlaceFilter {
    PlaceFilter {
        destination: Some(destination.to_string()),
        category: None,
        limit: 100,
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn upsert_inserts_and_round_trips_json(ctx: &TestHarness) {
    let destination = unique_destination("Kyoto");
    let id = format!("kyoto-{}", destination);

    let mut place = candidate(&id, &destination, Some(4.7), Some(1200));
    place.details.reviews = vec![ReviewSnippet {
        text: "Serene gardens".to_string(),
        rating: Some(5.0),
    }];
    place.website_content = WebsiteContent {
        summary: Some("Zen temple".to_string()),
        menu_keywords: vec!["matcha".to_string()],
        price_range: Some(PriceRange::Budget),
        vibe_keywords: vec!["peaceful".to_string()],
    };
    place.image_urls = vec!["https://photos.test/1".to_string()];

    let store = ctx.store();
    let written = store.upsert_places(&[place]).await.unwrap();
    assert_eq!(written, 1);

    let stored = Place::find_by_external_id(&id, &ctx.db_pool)
        .await
        .unwrap()
        .expect("place should exist");
    assert_eq!(stored.destination, destination);
    assert_eq!(stored.rating(), Some(4.7));
    assert!(stored.is_local_favorite);
    assert_eq!(stored.details.reviews[0].text, "Serene gardens");
    assert_eq!(stored.website_content.price_range, Some(PriceRange::Budget));
    assert_eq!(stored.image_urls, vec!["https://photos.test/1"]);

    let found = store.find_place(stored.id).await.unwrap();
    assert_eq!(found.map(|p| p.external_id), Some(id));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn upsert_is_idempotent_by_external_id(ctx: &TestHarness) {
    let destination = unique_destination("Osaka");
    let places: Vec<_> = (0..3)
        .map(|i| candidate(&format!("{}-{}", destination, i), &destination, Some(4.0), Some(10)))
        .collect();

    let store = ctx.store();
    let first = store.upsert_places(&places).await.unwrap();
    let before = store.list_places(&filter(&destination)).await.unwrap();

    let mut renamed = places.clone();
    renamed[0].name = "Renamed".to_string();
    let second = store.upsert_places(&renamed).await.unwrap();
    let after = store.list_places(&filter(&destination)).await.unwrap();

    assert_eq!(first, 3);
    assert_eq!(second, 3);
    assert_eq!(
        Place::count_by_destination(&destination, &ctx.db_pool)
            .await
            .unwrap(),
        3
    );

    let mut ids_before: Vec<_> = before.iter().map(|p| p.id).collect();
    let mut ids_after: Vec<_> = after.iter().map(|p| p.id).collect();
    ids_before.sort_by_key(|id| id.into_uuid());
    ids_after.sort_by_key(|id| id.into_uuid());
    assert_eq!(ids_before, ids_after);
    assert!(after.iter().any(|p| p.name == "Renamed"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn list_orders_by_rating_and_applies_filters(ctx: &TestHarness) {
    let destination = unique_destination("Nara");
    let mut park = candidate(&format!("{}-park", destination), &destination, Some(4.8), Some(5));
    park.category = "Relaxation".to_string();
    let places = vec![
        candidate(&format!("{}-low", destination), &destination, Some(3.9), Some(5)),
        park,
        candidate(&format!("{}-none", destination), &destination, None, None),
        candidate(&format!("{}-mid", destination), &destination, Some(4.2), Some(5)),
    ];

    let store = ctx.store();
    store.upsert_places(&places).await.unwrap();

    let all = store.list_places(&filter(&destination)).await.unwrap();
    let ratings: Vec<_> = all.iter().map(|p| p.rating()).collect();
    assert_eq!(ratings, vec![Some(4.8), Some(4.2), Some(3.9), None]);

    let relaxation = store
        .list_places(&PlaceFilter {
            category: Some("Relaxation".to_string()),
            ..filter(&destination)
        })
        .await
        .unwrap();
    assert_eq!(relaxation.len(), 1);

    let limited = store
        .list_places(&PlaceFilter {
            limit: 2,
            ..filter(&destination)
        })
        .await
        .unwrap();
    assert_eq!(limited.len(), 2);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn failed_batch_commits_nothing(ctx: &TestHarness) {
    let destination = unique_destination("Sapporo");
    let good = candidate(&format!("{}-good", destination), &destination, Some(4.0), Some(1));
    // NUL bytes are rejected by Postgres text columns
    let mut bad = candidate(&format!("{}-bad", destination), &destination, Some(4.0), Some(1));
    bad.name = "bad\0name".to_string();

    let store = ctx.store();
    let result = store.upsert_places(&[good, bad]).await;
    assert!(result.is_err());

    assert_eq!(
        Place::count_by_destination(&destination, &ctx.db_pool)
            .await
            .unwrap(),
        0
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_id_is_none(ctx: &TestHarness) {
    let store = ctx.store();
    let missing = store
        .find_place(server_core::common::PlaceId::new())
        .await
        .unwrap();
    assert!(missing.is_none());
}
