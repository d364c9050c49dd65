mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::MemoryCache;
use serde_json::Value;

// The fixture pool points at a closed port, so the database check fails and
// the endpoint must report degraded state while the cache check passes.
#[tokio::test]
async fn health_reports_database_outage_as_degraded() {
    let (state, _) = common::create_test_state(Arc::new(MemoryCache::new()));
    let server = common::make_server(state);

    let response = server.get("/health").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
    assert_eq!(body["checks"]["cache"]["status"], "ok");
    assert!(body["version"].is_string());
}
