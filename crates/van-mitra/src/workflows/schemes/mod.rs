//! Scheme recommendation engine.
//!
//! Scores every scheme in a catalog against a village's indicator profile, explains strong matches,
//! and returns the highest scoring schemes. Scoring is pure: the same village, catalog, and analysis
//! date always produce the same result.

pub mod domain;
pub mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    AnalysisResult, ImplementationComplexity, MatchedIndicator, Priority, Recommendation,
    SchemeCode, SchemeDefinition, VillageProfile,
};

use chrono::NaiveDate;
use tracing::debug;

use policy::{
    complexity_for, estimated_beneficiaries, priority_for, rounded_score, RECOMMENDATION_LIMIT,
};
use rules::{build_reasoning, score_scheme};

/// Stateless engine ranking a scheme catalog for one village at a time.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine {
    limit: usize,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self {
            limit: RECOMMENDATION_LIMIT,
        }
    }
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a single scheme without ranking it against the rest of the catalog.
    pub fn evaluate(&self, village: &VillageProfile, scheme: &SchemeDefinition) -> Recommendation {
        let score = score_scheme(village, scheme);
        let reasoning = build_reasoning(village, scheme, &score);

        debug!(
            scheme = %scheme.code,
            village = %village.name,
            total_impact = score.total_impact,
            normalized = score.normalized,
            matched = score.matched.len(),
            "scheme scored"
        );

        Recommendation {
            scheme_code: scheme.code.clone(),
            scheme: scheme.clone(),
            score: rounded_score(score.normalized),
            matched_indicators: score.matched,
            reasoning,
            priority: priority_for(score.normalized),
            estimated_beneficiaries: estimated_beneficiaries(village.population, score.normalized),
            implementation_complexity: complexity_for(score.normalized),
            is_active: village.runs_scheme(&scheme.code),
        }
    }

    pub fn analyze(
        &self,
        village: &VillageProfile,
        catalog: &[SchemeDefinition],
        analysis_date: NaiveDate,
    ) -> AnalysisResult {
        let mut recommendations: Vec<Recommendation> = catalog
            .iter()
            .map(|scheme| self.evaluate(village, scheme))
            .collect();

        // Stable sort keeps catalog order among equal scores.
        recommendations.sort_by(|a, b| b.score.cmp(&a.score));
        recommendations.truncate(self.limit);

        let critical_count = recommendations
            .iter()
            .filter(|recommendation| recommendation.priority == Priority::Critical)
            .count();

        AnalysisResult {
            village: village.clone(),
            recommendations,
            analysis_date,
            total_schemes_evaluated: catalog.len(),
            critical_count,
        }
    }
}

/// Rank `catalog` for `village` using the standard top-five cut.
pub fn recommend(
    village: &VillageProfile,
    catalog: &[SchemeDefinition],
    analysis_date: NaiveDate,
) -> AnalysisResult {
    RecommendationEngine::default().analyze(village, catalog, analysis_date)
}
