use super::common::*;
use std::sync::Arc;

use crate::catalog::{standard_villages, SchemeCatalog};
use crate::config::DataConfig;
use crate::decision_support::DecisionSupportService;
use crate::error::AppError;
use crate::workflows::claims::{ClaimId, ClaimStatus, ReviewDecision};
use crate::workflows::extraction::SAMPLE_FORM_A;

#[test]
fn standard_service_ranks_known_villages() {
    let service = standard_service();

    let result = service
        .recommend_for("Kakraban", analysis_date())
        .expect("village exists");

    assert_eq!(result.total_schemes_evaluated, 6);
    assert_eq!(result.recommendations.len(), 5);
    assert_eq!(result.recommendations[0].scheme_code.as_str(), "MGNREGA");
    assert_eq!(result.analysis_date, analysis_date());
}

#[test]
fn unknown_village_is_not_found() {
    let service = standard_service();

    let error = service
        .recommend_for("Agartala", analysis_date())
        .expect_err("village missing");

    assert!(matches!(error, AppError::NotFound(_)));
}

#[test]
fn claims_combine_status_filter_and_search() {
    let service = standard_service();

    let pending = service
        .claims(Some(ClaimStatus::Pending), None)
        .expect("claims listed");
    assert_eq!(pending.len(), 3);

    let narrowed = service
        .claims(Some(ClaimStatus::Pending), Some("udaipur"))
        .expect("claims listed");
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].claimant_name, "Mohan Lal");

    let blank_query = service.claims(None, Some("   ")).expect("claims listed");
    assert_eq!(blank_query.len(), 5);
}

#[test]
fn decisions_flow_into_statistics() {
    let service = standard_service();

    service
        .decide(ClaimId(1), ReviewDecision::Approve)
        .expect("decision applied");

    let stats = service.statistics().expect("statistics");
    assert_eq!(stats.approved, 2);
    assert_eq!(stats.pending, 2);
    let summary = service.map_summary().expect("summary");
    assert_eq!(summary.approved_area, 509.0 + 324.0);
}

#[test]
fn repository_failures_surface_as_review_errors() {
    let service = DecisionSupportService::new(
        SchemeCatalog::standard(),
        standard_villages(),
        Arc::new(UnavailableRepository),
    );

    assert!(matches!(service.statistics(), Err(AppError::Review(_))));
    assert!(matches!(
        service.decide(ClaimId(1), ReviewDecision::Approve),
        Err(AppError::Review(_))
    ));
}

#[test]
fn extraction_uses_configured_extractor() {
    let service = standard_service();

    let extracted = service.extract(SAMPLE_FORM_A);

    assert_eq!(extracted.claimant_name, "Rajesh Kumar Singh");
    assert_eq!(extracted.extent_hectares, 3.5);
}

#[test]
fn from_config_without_paths_uses_builtin_data() {
    let service = DecisionSupportService::from_config(&DataConfig::default()).expect("loads");

    assert_eq!(service.catalog().len(), 6);
    assert_eq!(service.villages().len(), 5);
    assert_eq!(service.claims(None, None).expect("claims").len(), 5);
}

#[test]
fn from_config_reports_missing_files() {
    let data = DataConfig {
        scheme_catalog: Some(std::env::temp_dir().join("van-mitra-missing-catalog.json")),
        ..DataConfig::default()
    };

    assert!(DecisionSupportService::from_config(&data).is_err());
}
