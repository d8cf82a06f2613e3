use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::workflows::schemes::domain::{SchemeCode, SchemeDefinition, VillageProfile};

pub(super) fn analysis_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 15).expect("valid analysis date")
}

pub(super) fn scheme(code: &str, weights: &[(&str, f64)]) -> SchemeDefinition {
    SchemeDefinition {
        code: SchemeCode::new(code),
        full_name: format!("{code} full name"),
        description: format!("{code} description"),
        budget: "State-level implementation".to_string(),
        eligibility: vec!["Rural households".to_string()],
        benefits: vec!["Support".to_string()],
        focus_areas: vec!["Livelihoods".to_string()],
        indicator_weights: weights
            .iter()
            .map(|(name, weight)| (name.to_string(), *weight))
            .collect::<IndexMap<_, _>>(),
    }
}

pub(super) fn village(indicators: &[(&str, f64)]) -> VillageProfile {
    VillageProfile {
        id: 42,
        name: "Testpur".to_string(),
        population: 1000,
        tribal_population_pct: 60,
        forest_cover_pct: 50,
        indicators: indicators
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect::<BTreeMap<_, _>>(),
        existing_scheme_codes: BTreeSet::new(),
        avg_income: 40000,
        landlessness_pct: 30,
    }
}

pub(super) fn tribal_village() -> VillageProfile {
    let mut village = village(&[
        ("tribalPopulation", 90.0),
        ("forestDependency", 90.0),
        ("landlessness", 80.0),
        ("forestCover", 70.0),
    ]);
    village.tribal_population_pct = 80;
    village
}

pub(super) fn fra_scheme() -> SchemeDefinition {
    scheme(
        "FRA",
        &[
            ("tribalPopulation", 0.95),
            ("forestDependency", 0.9),
            ("landlessness", 0.85),
            ("forestCover", 0.7),
        ],
    )
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
