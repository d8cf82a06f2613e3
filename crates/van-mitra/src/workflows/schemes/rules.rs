use super::domain::{MatchedIndicator, SchemeDefinition, VillageProfile};
use super::policy::{
    FRA_SCHEME_CODE, FRA_TRIBAL_POPULATION_THRESHOLD, MATCH_IMPACT_THRESHOLD,
    REASONING_INDICATOR_LIMIT, REASONING_SCORE_THRESHOLD,
};

/// Raw scoring signals for one scheme before tiers and metrics are derived.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SchemeScore {
    pub(crate) total_impact: f64,
    pub(crate) normalized: f64,
    /// Impact-descending; ties keep the scheme's weight declaration order.
    pub(crate) matched: Vec<MatchedIndicator>,
}

pub(crate) fn score_scheme(village: &VillageProfile, scheme: &SchemeDefinition) -> SchemeScore {
    let mut total_impact = 0.0;
    let mut matched = Vec::new();

    for (indicator, weight) in &scheme.indicator_weights {
        let Some(&village_value) = village.indicators.get(indicator) else {
            continue;
        };

        let impact_score = (village_value / 100.0) * weight * 100.0;
        total_impact += impact_score;

        if impact_score > MATCH_IMPACT_THRESHOLD {
            matched.push(MatchedIndicator {
                indicator_name: indicator.clone(),
                village_value,
                weight: *weight,
                impact_score,
            });
        }
    }

    // Denominator is every weighted indicator, so absent village data drags the average down.
    let normalized = match scheme.indicator_weights.len() {
        0 => 0.0,
        count => (total_impact / count as f64).min(100.0),
    };

    matched.sort_by(|a, b| b.impact_score.total_cmp(&a.impact_score));

    SchemeScore {
        total_impact,
        normalized,
        matched,
    }
}

pub(crate) fn build_reasoning(
    village: &VillageProfile,
    scheme: &SchemeDefinition,
    score: &SchemeScore,
) -> Vec<String> {
    if score.normalized <= REASONING_SCORE_THRESHOLD {
        return Vec::new();
    }

    let mut reasoning: Vec<String> = score
        .matched
        .iter()
        .take(REASONING_INDICATOR_LIMIT)
        .map(|indicator| {
            format!(
                "High {} ({}%) aligns with scheme focus",
                indicator.indicator_name, indicator.village_value
            )
        })
        .collect();

    if village.runs_scheme(&scheme.code) {
        reasoning.push("Already active - consider expansion or optimization".to_string());
    } else {
        reasoning.push("Not currently implemented - high potential for impact".to_string());
    }

    if scheme.code.as_str() == FRA_SCHEME_CODE
        && village.tribal_population_pct > FRA_TRIBAL_POPULATION_THRESHOLD
    {
        reasoning.push(format!(
            "High tribal population ({}%) makes this highly relevant",
            village.tribal_population_pct
        ));
    }

    reasoning
}
