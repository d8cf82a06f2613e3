use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Short scheme identifier such as `MGNREGA` or `PMAY-G`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeCode(pub String);

impl SchemeCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SchemeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Knowledge base entry for a government scheme.
///
/// Display fields are opaque to scoring; only `indicator_weights` feeds the engine. Weights keep
/// their declaration order so equal-impact matches are explained in a stable order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeDefinition {
    pub code: SchemeCode,
    pub full_name: String,
    pub description: String,
    pub budget: String,
    #[serde(default)]
    pub eligibility: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    pub indicator_weights: IndexMap<String, f64>,
}

/// Socio-economic snapshot of a village. Indicator values are percentages; an absent key means the
/// indicator does not apply, which is different from a zero reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillageProfile {
    pub id: u32,
    pub name: String,
    pub population: u32,
    pub tribal_population_pct: u8,
    pub forest_cover_pct: u8,
    pub indicators: BTreeMap<String, f64>,
    #[serde(default)]
    pub existing_scheme_codes: BTreeSet<SchemeCode>,
    pub avg_income: u32,
    pub landlessness_pct: u8,
}

impl VillageProfile {
    pub fn runs_scheme(&self, code: &SchemeCode) -> bool {
        self.existing_scheme_codes.contains(code)
    }
}

/// Indicator whose weighted impact cleared the match threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedIndicator {
    pub indicator_name: String,
    pub village_value: f64,
    pub weight: f64,
    pub impact_score: f64,
}

/// Display bucket for a recommendation, derived from the match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImplementationComplexity {
    Low,
    Medium,
}

impl ImplementationComplexity {
    pub const fn label(self) -> &'static str {
        match self {
            ImplementationComplexity::Low => "Low",
            ImplementationComplexity::Medium => "Medium",
        }
    }
}

/// Scored, explained recommendation for a single scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub scheme_code: SchemeCode,
    pub scheme: SchemeDefinition,
    pub score: u8,
    pub matched_indicators: Vec<MatchedIndicator>,
    pub reasoning: Vec<String>,
    pub priority: Priority,
    pub estimated_beneficiaries: u32,
    pub implementation_complexity: ImplementationComplexity,
    pub is_active: bool,
}

/// Call-level output of the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub village: VillageProfile,
    pub recommendations: Vec<Recommendation>,
    pub analysis_date: NaiveDate,
    pub total_schemes_evaluated: usize,
    pub critical_count: usize,
}
