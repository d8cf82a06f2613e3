use super::domain::{ImplementationComplexity, Priority};

/// Impact an indicator must exceed before it is recorded as a match.
pub const MATCH_IMPACT_THRESHOLD: f64 = 40.0;
/// Normalized score above which a recommendation carries a reasoning trail.
pub const REASONING_SCORE_THRESHOLD: f64 = 60.0;
/// Upper bound on reasoning lines drawn from matched indicators.
pub const REASONING_INDICATOR_LIMIT: usize = 3;
/// Number of ranked recommendations returned per analysis.
pub const RECOMMENDATION_LIMIT: usize = 5;
/// Tribal population share above which the FRA scheme gets an extra note.
pub const FRA_TRIBAL_POPULATION_THRESHOLD: u8 = 70;
pub const FRA_SCHEME_CODE: &str = "FRA";

const CRITICAL_ABOVE: f64 = 75.0;
const HIGH_ABOVE: f64 = 60.0;
const MEDIUM_ABOVE: f64 = 45.0;
const MEDIUM_COMPLEXITY_ABOVE: f64 = 70.0;
const BENEFICIARY_DAMPING: f64 = 200.0;

/// Tier for a normalized score. Evaluated on the unrounded value, highest threshold first.
pub fn priority_for(normalized_score: f64) -> Priority {
    if normalized_score > CRITICAL_ABOVE {
        Priority::Critical
    } else if normalized_score > HIGH_ABOVE {
        Priority::High
    } else if normalized_score > MEDIUM_ABOVE {
        Priority::Medium
    } else {
        Priority::Low
    }
}

pub fn complexity_for(normalized_score: f64) -> ImplementationComplexity {
    if normalized_score > MEDIUM_COMPLEXITY_ABOVE {
        ImplementationComplexity::Medium
    } else {
        ImplementationComplexity::Low
    }
}

/// Half the population scaled by the score, so a perfect match reaches half the village.
pub fn estimated_beneficiaries(population: u32, normalized_score: f64) -> u32 {
    let estimate = (population as f64 * normalized_score / BENEFICIARY_DAMPING).round();
    estimate.clamp(0.0, u32::MAX as f64) as u32
}

/// Rounds half away from zero, clamped to the 0-100 score scale.
pub fn rounded_score(normalized_score: f64) -> u8 {
    normalized_score.round().clamp(0.0, 100.0) as u8
}
