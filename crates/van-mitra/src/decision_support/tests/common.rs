use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::decision_support::{decision_support_router, DecisionSupportService};
use crate::workflows::claims::repository::{ClaimRepository, RepositoryError};
use crate::workflows::claims::{ClaimId, ClaimRecord, InMemoryClaimRepository};

pub(super) fn analysis_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 15).expect("valid date")
}

pub(super) fn standard_service() -> Arc<DecisionSupportService<InMemoryClaimRepository>> {
    Arc::new(DecisionSupportService::standard())
}

pub(super) fn router() -> axum::Router {
    decision_support_router(standard_service())
}

pub(super) fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) struct UnavailableRepository;

impl ClaimRepository for UnavailableRepository {
    fn list(&self) -> Result<Vec<ClaimRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: ClaimId) -> Result<Option<ClaimRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn update(&self, _record: ClaimRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}
