use super::helpers::{InMemoryCatalogues, assert_status, catalogue, get, read_json, spawn_app};
use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn smoke_health_list_videos_and_flip_url() {
    let app = spawn_app(InMemoryCatalogues {
        catalogues: vec![catalogue("CAT-0001", "Spring", 1, true)],
        ..Default::default()
    });

    let res = get(&app, "/health").await;
    assert_status(res.status(), StatusCode::OK);
    let health: Value = read_json(res).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["database"], "up");

    for uri in [
        "/api/v1/catalogues",
        "/api/v1/catalogues/CAT-0001/videos",
        "/api/v1/catalogues/CAT-0001/flip-url",
    ] {
        let res = get(&app, uri).await;
        assert_status(res.status(), StatusCode::OK);
        let payload: Value = read_json(res).await;
        assert!(payload["message"].is_object(), "{} should wrap its payload", uri);
    }
}

#[tokio::test]
async fn unhealthy_store_reports_503() {
    let app = spawn_app(InMemoryCatalogues {
        unreachable: true,
        ..Default::default()
    });

    let res = get(&app, "/health").await;
    assert_status(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let health: Value = read_json(res).await;
    assert_eq!(health["database"], "down");
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let app = spawn_app(InMemoryCatalogues::default());

    let ok = get(&app, "/api/v1/catalogues").await;
    let missing = get(&app, "/api/v1/catalogues/nope/videos").await;

    for res in [ok, missing] {
        let id = res
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .expect("x-request-id header missing");
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}
