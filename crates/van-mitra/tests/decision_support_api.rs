//! HTTP scenarios over a service loaded from the fixture data files.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use van_mitra::config::DataConfig;
use van_mitra::decision_support::{decision_support_router, DecisionSupportService};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn fixture_router() -> axum::Router {
    let data = DataConfig {
        scheme_catalog: Some(fixture("schemes.json")),
        village_data: Some(fixture("villages.json")),
        claims_csv: Some(fixture("claims.csv")),
    };
    let service = DecisionSupportService::from_config(&data).expect("fixtures load");
    decision_support_router(Arc::new(service))
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn villages_and_recommendations_come_from_fixtures() {
    let app = fixture_router();

    let response = app
        .clone()
        .oneshot(
            Request::get("/api/v1/villages")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    let villages = read_json(response).await;
    assert_eq!(villages.as_array().map(Vec::len), Some(2));

    let response = app
        .oneshot(
            Request::get("/api/v1/villages/Jampui%20Hills/recommendations?date=2025-10-02")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["recommendations"][0]["scheme_code"], json!("FRA"));
    assert_eq!(payload["recommendations"][0]["score"], json!(68));
    assert_eq!(payload["total_schemes_evaluated"], json!(3));
}

#[tokio::test]
async fn review_decision_changes_summary() {
    let app = fixture_router();

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/v1/claims/21/decision")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "decision": "approve" }).to_string()))
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::get("/api/v1/claims/summary")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    let payload = read_json(response).await;
    assert_eq!(payload["statistics"]["approved"], json!(2));
    assert_eq!(payload["statistics"]["review"], json!(1));
    assert_eq!(payload["map"]["approved_area"], json!(4.25));
    assert_eq!(
        payload["map"]["top_villages"][0],
        json!({ "village": "Jampui Hills", "claims": 2 })
    );
}

#[tokio::test]
async fn rejecting_without_reason_is_unprocessable() {
    let response = fixture_router()
        .oneshot(
            Request::post("/api/v1/claims/23/decision")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "decision": "reject", "reason": "" }).to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
