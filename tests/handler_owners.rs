mod common;

use std::sync::Arc;

use common::MemoryCache;
use serde_json::Value;

fn server() -> (axum_test::TestServer, Arc<common::InMemoryStore>) {
    let (state, store) = common::create_test_state(Arc::new(MemoryCache::new()));
    (common::make_server(state), store)
}

// ─── GET /api/owners ─────────────────────────────────────────────────────────

#[tokio::test]
async fn list_all_owners_with_derived_pet_fields() {
    let (server, _) = server();

    let response = server.get("/api/owners").await;
    response.assert_status_ok();

    let owners: Value = response.json();
    let owners = owners.as_array().unwrap();
    assert_eq!(owners.len(), 3);

    let alice = owners.iter().find(|o| o["id"] == 1).unwrap();
    assert_eq!(alice["first_name"], "Alice");
    assert_eq!(alice["pet_count"], 2);
    assert_eq!(alice["pet_ids"], serde_json::json!([10, 11]));

    let bob = owners.iter().find(|o| o["id"] == 2).unwrap();
    assert_eq!(bob["pet_count"], 0);
}

// ─── GET /api/owners/by-id/{id} ──────────────────────────────────────────────

#[tokio::test]
async fn owner_by_id_found() {
    let (server, _) = server();

    let response = server.get("/api/owners/by-id/1").await;
    response.assert_status_ok();

    let owner: Value = response.json();
    assert_eq!(owner["last_name"], "Goldenpaw");
    assert_eq!(owner["email"], "alice@example.com");
}

#[tokio::test]
async fn owner_by_id_unknown_is_404_and_repeatable() {
    let (server, _) = server();

    let response = server.get("/api/owners/by-id/999").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");

    // A miss on an absent id caches nothing; the repeat behaves identically.
    server.get("/api/owners/by-id/999").await.assert_status_not_found();
}

#[tokio::test]
async fn owner_by_id_non_positive_is_400() {
    let (server, _) = server();

    let response = server.get("/api/owners/by-id/0").await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

// ─── GET /api/owners/by-name/{last_name} ─────────────────────────────────────

#[tokio::test]
async fn owners_by_last_name_returns_all_matches() {
    let (server, _) = server();

    let response = server.get("/api/owners/by-name/Goldenpaw").await;
    response.assert_status_ok();

    let owners: Value = response.json();
    let owners = owners.as_array().unwrap();
    assert_eq!(owners.len(), 2);
    assert!(owners.iter().all(|o| o["last_name"] == "Goldenpaw"));
}

#[tokio::test]
async fn owners_by_name_narrowed_by_first_name() {
    let (server, store) = server();

    // Populate the last-name entry.
    server
        .get("/api/owners/by-name/Goldenpaw")
        .await
        .assert_status_ok();
    let queries_after_populate = store.query_count();

    let response = server
        .get("/api/owners/by-name/Goldenpaw")
        .add_query_param("first_name", "Hannah")
        .await;
    response.assert_status_ok();

    let owners: Value = response.json();
    let owners = owners.as_array().unwrap();
    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0]["id"], 7);
    assert_eq!(owners[0]["first_name"], "Hannah");

    // The narrowed lookup was answered from the cached last-name list.
    assert_eq!(store.query_count(), queries_after_populate);
}

#[tokio::test]
async fn owners_by_name_no_match_is_404() {
    let (server, _) = server();

    server
        .get("/api/owners/by-name/Unknownname")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn owners_by_name_cached_list_with_unmatched_filter_is_404_without_query() {
    let (server, store) = server();

    server
        .get("/api/owners/by-name/Goldenpaw")
        .await
        .assert_status_ok();
    let queries_after_populate = store.query_count();

    // Cache hit on the broader key, zero narrowed matches: 404, no new query.
    server
        .get("/api/owners/by-name/Goldenpaw")
        .add_query_param("first_name", "Nobody")
        .await
        .assert_status_not_found();
    assert_eq!(store.query_count(), queries_after_populate);
}

// ─── GET /api/owners/full/* ──────────────────────────────────────────────────

#[tokio::test]
async fn full_owner_by_id_nests_pets_boosters_and_visits() {
    let (server, _) = server();

    let response = server.get("/api/owners/full/by-id/1").await;
    response.assert_status_ok();

    let owner: Value = response.json();
    assert_eq!(owner["address"], "123 Main St");

    let pets = owner["pets"].as_array().unwrap();
    assert_eq!(pets.len(), 2);

    let fluffy = pets.iter().find(|p| p["id"] == 10).unwrap();
    assert_eq!(fluffy["boosters"][0]["name"], "Rabies");
    assert_eq!(fluffy["visits"][0]["notes"], "Routine check");
    assert_eq!(fluffy["owner"]["id"], 1);
}

#[tokio::test]
async fn full_owner_by_id_unknown_is_404() {
    let (server, _) = server();

    server
        .get("/api/owners/full/by-id/999")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn full_owners_by_name_narrowed_by_first_name() {
    let (server, _) = server();

    let response = server
        .get("/api/owners/full/by-name/Goldenpaw")
        .add_query_param("first_name", "Alice")
        .await;
    response.assert_status_ok();

    let owners: Value = response.json();
    let owners = owners.as_array().unwrap();
    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0]["first_name"], "Alice");
    assert_eq!(owners[0]["pets"].as_array().unwrap().len(), 2);
}
