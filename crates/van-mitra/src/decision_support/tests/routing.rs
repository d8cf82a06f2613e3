use super::common::*;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::catalog::{standard_villages, SchemeCatalog};
use crate::decision_support::router::decision_handler;
use crate::decision_support::DecisionSupportService;
use crate::workflows::claims::ReviewDecision;

#[tokio::test]
async fn schemes_route_lists_catalog_in_order() {
    let response = router()
        .oneshot(get("/api/v1/schemes"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let codes: Vec<_> = payload
        .as_array()
        .expect("array payload")
        .iter()
        .filter_map(|scheme| scheme.get("code").and_then(serde_json::Value::as_str))
        .collect();
    assert_eq!(codes, vec!["MGNREGA", "PMKSY", "NRLM", "CAMPA", "FRA", "PMAY-G"]);
}

#[tokio::test]
async fn village_recommendations_accept_id_and_date() {
    let response = router()
        .oneshot(get("/api/v1/villages/1/recommendations?date=2025-09-15"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["analysis_date"], json!("2025-09-15"));
    assert_eq!(payload["village"]["name"], json!("Kakraban"));
    assert_eq!(payload["recommendations"][0]["scheme_code"], json!("MGNREGA"));
    assert_eq!(payload["recommendations"][0]["score"], json!(33));
    assert_eq!(payload["critical_count"], json!(0));
}

#[tokio::test]
async fn unknown_village_returns_not_found() {
    let response = router()
        .oneshot(get("/api/v1/villages/Agartala/recommendations"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("Agartala"));
}

#[tokio::test]
async fn recommendations_route_scores_supplied_profile_and_catalog() {
    let body = json!({
        "village": {
            "id": 42,
            "name": "Test Village",
            "population": 2000,
            "tribal_population_pct": 80,
            "forest_cover_pct": 60,
            "indicators": {"tribalPopulation": 90, "forestCover": 80},
            "avg_income": 30000,
            "landlessness_pct": 40
        },
        "catalog": [{
            "code": "FRA",
            "full_name": "Forest Rights Act",
            "description": "",
            "budget": "",
            "indicator_weights": {"tribalPopulation": 0.9, "forestCover": 0.8}
        }],
        "analysis_date": "2025-09-15"
    });

    let response = router()
        .oneshot(json_request("POST", "/api/v1/recommendations", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let top = &payload["recommendations"][0];
    // (81 + 64) / 2 = 72.5
    assert_eq!(top["score"], json!(73));
    assert_eq!(top["priority"], json!("High"));
    assert_eq!(top["implementation_complexity"], json!("Medium"));
    assert_eq!(payload["total_schemes_evaluated"], json!(1));
    assert_eq!(
        top["reasoning"].as_array().map(Vec::len),
        Some(4),
        "two indicators, status line, tribal line"
    );
}

#[tokio::test]
async fn recommendations_route_rejects_invalid_catalog() {
    let body = json!({
        "village": {
            "id": 1,
            "name": "Tiny",
            "population": 10,
            "tribal_population_pct": 10,
            "forest_cover_pct": 10,
            "indicators": {"poverty": 50},
            "avg_income": 1000,
            "landlessness_pct": 1
        },
        "catalog": [{
            "code": "BAD",
            "full_name": "",
            "description": "",
            "budget": "",
            "indicator_weights": {"poverty": 2.0}
        }]
    });

    let response = router()
        .oneshot(json_request("POST", "/api/v1/recommendations", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn extract_route_returns_fields_and_confidence() {
    let body = json!({ "text": "Patta Number: IFR-1\nExtent of Land: 2.25 hectares" });

    let response = router()
        .oneshot(json_request("POST", "/api/v1/extract", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["patta_number"], json!("IFR-1"));
    assert_eq!(payload["extent_hectares"], json!(2.25));
    assert_eq!(payload["confidence"]["patta_number"], json!(100));
    assert_eq!(payload["confidence"]["extent"], json!(97));
    assert!(payload["confidence"].get("claimant_name").is_none());
}

#[tokio::test]
async fn claims_route_filters_and_searches() {
    let response = router()
        .oneshot(get("/api/v1/claims?status=pending&q=kumar"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let names: Vec<_> = payload
        .as_array()
        .expect("array payload")
        .iter()
        .filter_map(|claim| claim["claimant_name"].as_str())
        .collect();
    assert_eq!(names, vec!["Amit Kumar"]);
}

#[tokio::test]
async fn claims_route_treats_all_as_no_filter() {
    let response = router()
        .oneshot(get("/api/v1/claims?status=all"))
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn claims_route_rejects_unknown_status() {
    let response = router()
        .oneshot(get("/api/v1/claims?status=archived"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn summary_route_reports_statistics_and_map() {
    let response = router()
        .oneshot(get("/api/v1/claims/summary"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["statistics"]["total_claims"], json!(5));
    assert_eq!(payload["statistics"]["avg_confidence"], json!(90));
    assert_eq!(payload["map"]["approval_rate_pct"], json!(20.0));
}

#[tokio::test]
async fn decision_route_updates_claim_status() {
    let service = standard_service();
    let app = crate::decision_support::decision_support_router(service.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/claims/3/decision",
            json!({ "decision": "reject", "reason": "Boundary overlaps reserve" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["previous_status"], json!("pending"));
    assert_eq!(payload["status"], json!("rejected"));

    let rejected = service
        .claims(Some(crate::workflows::claims::ClaimStatus::Rejected), None)
        .expect("claims listed");
    assert_eq!(rejected.len(), 1);
}

#[tokio::test]
async fn decision_handler_maps_review_errors() {
    let missing = decision_handler(
        State(standard_service()),
        Path(99),
        Json(ReviewDecision::Approve),
    )
    .await
    .into_response();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let without_reason = decision_handler(
        State(standard_service()),
        Path(1),
        Json(ReviewDecision::Reject {
            reason: " ".to_string(),
        }),
    )
    .await
    .into_response();
    assert_eq!(without_reason.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let offline = Arc::new(DecisionSupportService::new(
        SchemeCatalog::standard(),
        standard_villages(),
        Arc::new(UnavailableRepository),
    ));
    let failed = decision_handler(State(offline), Path(1), Json(ReviewDecision::Approve))
        .await
        .into_response();
    assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn rejection_without_reason_key_returns_json_error() {
    let response = router()
        .oneshot(json_request(
            "POST",
            "/api/v1/claims/1/decision",
            json!({ "decision": "reject" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("reason is required"));
}
