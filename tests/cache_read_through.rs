//! End-to-end behavior of the read-through cache layer, driven over HTTP.

mod common;

use std::sync::Arc;

use common::MemoryCache;
use pet_warehouse::infrastructure::cache::NullCache;
use serde_json::Value;

// ─── Miss-then-populate ──────────────────────────────────────────────────────

#[tokio::test]
async fn owner_lookup_queries_store_once_then_serves_from_cache() {
    let cache = Arc::new(MemoryCache::new());
    let (state, store) = common::create_test_state(cache.clone());
    let server = common::make_server(state);

    let first: Value = server.get("/api/owners/by-id/1").await.json();
    assert_eq!(store.query_count(), 1);

    // The entry is stored under the derived key as a one-element JSON array.
    let raw = cache.raw_value("owners:1").unwrap();
    assert!(raw.starts_with('['));

    let second: Value = server.get("/api/owners/by-id/1").await.json();
    assert_eq!(store.query_count(), 1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn absent_owner_creates_no_cache_entry() {
    let cache = Arc::new(MemoryCache::new());
    let (state, store) = common::create_test_state(cache.clone());
    let server = common::make_server(state);

    server.get("/api/owners/by-id/999").await.assert_status_not_found();
    server.get("/api/owners/by-id/999").await.assert_status_not_found();

    // Both misses consulted the store; nothing was cached for the absent id.
    assert_eq!(store.query_count(), 2);
    assert!(cache.raw_value("owners:999").is_none());
}

// ─── Primary-selector reuse ──────────────────────────────────────────────────

#[tokio::test]
async fn one_cached_list_serves_every_first_name_variant() {
    let cache = Arc::new(MemoryCache::new());
    let (state, store) = common::create_test_state(cache.clone());
    let server = common::make_server(state);

    let all: Value = server.get("/api/owners/by-name/Goldenpaw").await.json();
    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(store.query_count(), 1);
    assert!(cache.raw_value("owners:name:Goldenpaw").is_some());

    let hannah: Value = server
        .get("/api/owners/by-name/Goldenpaw")
        .add_query_param("first_name", "Hannah")
        .await
        .json();
    let alice: Value = server
        .get("/api/owners/by-name/Goldenpaw")
        .add_query_param("first_name", "Alice")
        .await
        .json();

    // Distinct, correctly narrowed subsets; no further store queries.
    assert_eq!(store.query_count(), 1);
    assert_eq!(hannah.as_array().unwrap().len(), 1);
    assert_eq!(hannah[0]["id"], 7);
    assert_eq!(alice.as_array().unwrap().len(), 1);
    assert_eq!(alice[0]["id"], 1);
}

// ─── Degraded mode ───────────────────────────────────────────────────────────

#[tokio::test]
async fn null_cache_falls_through_to_store_on_every_call() {
    let (state, store) = common::create_test_state(Arc::new(NullCache::new()));
    let server = common::make_server(state);

    let first: Value = server.get("/api/owners/by-id/1").await.json();
    let second: Value = server.get("/api/owners/by-id/1").await.json();

    // Identical results to the cache never existing, one store query each.
    assert_eq!(first, second);
    assert_eq!(store.query_count(), 2);
}

#[tokio::test]
async fn null_cache_serves_name_lookups_identically() {
    let (state, _) = common::create_test_state(Arc::new(NullCache::new()));
    let degraded = common::make_server(state);

    let (state, _) = common::create_test_state(Arc::new(MemoryCache::new()));
    let cached = common::make_server(state);

    for path in [
        "/api/owners/by-name/Goldenpaw",
        "/api/pets/by-owner-name/Goldenpaw",
        "/api/pets/by-owner-id/1",
    ] {
        let a: Value = degraded.get(path).await.json();
        let b: Value = cached.get(path).await.json();
        assert_eq!(a, b, "degraded and cached responses differ for {}", path);
    }
}

// ─── Malformed payloads ──────────────────────────────────────────────────────

#[tokio::test]
async fn malformed_cached_payload_is_treated_as_miss_and_repaired() {
    let cache = Arc::new(MemoryCache::new());
    let (state, store) = common::create_test_state(cache.clone());
    let server = common::make_server(state);

    cache.insert_raw("owners:1", "{definitely not json");

    let response = server.get("/api/owners/by-id/1").await;
    response.assert_status_ok();

    // The lookup fell through to the store and re-populated the entry.
    assert_eq!(store.query_count(), 1);
    let raw = cache.raw_value("owners:1").unwrap();
    assert!(raw.starts_with('['));
}
