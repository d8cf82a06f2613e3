use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::service::DecisionSupportService;
use crate::catalog::{validate_villages, SchemeCatalog};
use crate::error::AppError;
use crate::workflows::claims::{
    ClaimId, ClaimRecord, ClaimRepository, ClaimStatistics, ClaimStatus, MapSummary,
    ReviewDecision, ReviewOutcome,
};
use crate::workflows::extraction::ExtractedClaimFields;
use crate::workflows::schemes::{AnalysisResult, SchemeDefinition, VillageProfile};

#[derive(Debug, Default, Deserialize)]
pub struct AnalysisDateQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub village: VillageProfile,
    #[serde(default)]
    pub catalog: Option<Vec<SchemeDefinition>>,
    #[serde(default)]
    pub analysis_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractionRequest {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClaimQuery {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClaimSummaryResponse {
    pub statistics: ClaimStatistics,
    pub map: MapSummary,
}

/// Router exposing recommendations, extraction, and the claim registry under `/api/v1`.
pub fn decision_support_router<R>(service: Arc<DecisionSupportService<R>>) -> Router
where
    R: ClaimRepository + 'static,
{
    Router::new()
        .route("/api/v1/schemes", get(schemes_handler::<R>))
        .route("/api/v1/villages", get(villages_handler::<R>))
        .route(
            "/api/v1/villages/:village/recommendations",
            get(village_recommendations_handler::<R>),
        )
        .route("/api/v1/recommendations", post(recommendations_handler::<R>))
        .route("/api/v1/extract", post(extract_handler::<R>))
        .route("/api/v1/claims", get(claims_handler::<R>))
        .route("/api/v1/claims/summary", get(claim_summary_handler::<R>))
        .route(
            "/api/v1/claims/:claim_id/decision",
            post(decision_handler::<R>),
        )
        .with_state(service)
}

fn analysis_date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

pub(crate) async fn schemes_handler<R>(
    State(service): State<Arc<DecisionSupportService<R>>>,
) -> Json<SchemeCatalog>
where
    R: ClaimRepository + 'static,
{
    Json(service.catalog().clone())
}

pub(crate) async fn villages_handler<R>(
    State(service): State<Arc<DecisionSupportService<R>>>,
) -> Json<Vec<VillageProfile>>
where
    R: ClaimRepository + 'static,
{
    Json(service.villages().to_vec())
}

pub(crate) async fn village_recommendations_handler<R>(
    State(service): State<Arc<DecisionSupportService<R>>>,
    Path(village): Path<String>,
    Query(query): Query<AnalysisDateQuery>,
) -> Result<Json<AnalysisResult>, AppError>
where
    R: ClaimRepository + 'static,
{
    let result = service.recommend_for(&village, analysis_date_or_today(query.date))?;
    Ok(Json(result))
}

pub(crate) async fn recommendations_handler<R>(
    State(service): State<Arc<DecisionSupportService<R>>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<AnalysisResult>, AppError>
where
    R: ClaimRepository + 'static,
{
    let RecommendationRequest {
        village,
        catalog,
        analysis_date,
    } = request;

    validate_villages(std::slice::from_ref(&village))?;
    let catalog = catalog.map(SchemeCatalog::new).transpose()?;

    let result = service.recommend_profile(
        &village,
        catalog.as_ref(),
        analysis_date_or_today(analysis_date),
    );
    Ok(Json(result))
}

pub(crate) async fn extract_handler<R>(
    State(service): State<Arc<DecisionSupportService<R>>>,
    Json(request): Json<ExtractionRequest>,
) -> Json<ExtractedClaimFields>
where
    R: ClaimRepository + 'static,
{
    Json(service.extract(&request.text))
}

pub(crate) async fn claims_handler<R>(
    State(service): State<Arc<DecisionSupportService<R>>>,
    Query(query): Query<ClaimQuery>,
) -> Result<Json<Vec<ClaimRecord>>, AppError>
where
    R: ClaimRepository + 'static,
{
    let status = query
        .status
        .as_deref()
        .filter(|status| !status.trim().is_empty() && !status.eq_ignore_ascii_case("all"))
        .map(str::parse::<ClaimStatus>)
        .transpose()?;

    let claims = service.claims(status, query.q.as_deref())?;
    Ok(Json(claims))
}

pub(crate) async fn claim_summary_handler<R>(
    State(service): State<Arc<DecisionSupportService<R>>>,
) -> Result<Json<ClaimSummaryResponse>, AppError>
where
    R: ClaimRepository + 'static,
{
    Ok(Json(ClaimSummaryResponse {
        statistics: service.statistics()?,
        map: service.map_summary()?,
    }))
}

pub(crate) async fn decision_handler<R>(
    State(service): State<Arc<DecisionSupportService<R>>>,
    Path(claim_id): Path<u32>,
    Json(decision): Json<ReviewDecision>,
) -> Result<Json<ReviewOutcome>, AppError>
where
    R: ClaimRepository + 'static,
{
    let outcome = service.decide(ClaimId(claim_id), decision)?;
    Ok(Json(outcome))
}
