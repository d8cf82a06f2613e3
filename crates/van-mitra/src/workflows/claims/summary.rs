use indexmap::IndexMap;
use serde::Serialize;

use super::domain::{ClaimRecord, ClaimStatus};

const TOP_VILLAGE_LIMIT: usize = 5;

/// Headline numbers for the claims dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimStatistics {
    pub total_claims: usize,
    pub pending: usize,
    pub approved: usize,
    pub review: usize,
    pub rejected: usize,
    pub total_hectares: f64,
    pub avg_confidence: u8,
}

impl ClaimStatistics {
    pub fn from_claims(claims: &[ClaimRecord]) -> Self {
        let count = |status: ClaimStatus| claims.iter().filter(|c| c.status == status).count();
        let total_hectares = claims.iter().map(|claim| claim.extent_hectares).sum();
        let avg_confidence = if claims.is_empty() {
            0
        } else {
            let total: u32 = claims.iter().map(|claim| u32::from(claim.confidence)).sum();
            (total as f64 / claims.len() as f64).round().clamp(0.0, 100.0) as u8
        };

        Self {
            total_claims: claims.len(),
            pending: count(ClaimStatus::Pending),
            approved: count(ClaimStatus::Approved),
            review: count(ClaimStatus::Review),
            rejected: count(ClaimStatus::Rejected),
            total_hectares,
            avg_confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VillageClaimCount {
    pub village: String,
    pub claims: usize,
}

/// Aggregates shown alongside the claims map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSummary {
    pub total_claims: usize,
    pub approved: usize,
    pub pending: usize,
    pub under_review: usize,
    pub rejected: usize,
    pub total_area: f64,
    pub approved_area: f64,
    pub approval_rate_pct: f64,
    pub top_villages: Vec<VillageClaimCount>,
}

impl MapSummary {
    pub fn from_claims(claims: &[ClaimRecord]) -> Self {
        let statistics = ClaimStatistics::from_claims(claims);
        let approved_area = claims
            .iter()
            .filter(|claim| claim.status == ClaimStatus::Approved)
            .map(|claim| claim.extent_hectares)
            .sum();
        let approval_rate_pct = if claims.is_empty() {
            0.0
        } else {
            (statistics.approved as f64 / claims.len() as f64 * 1000.0).round() / 10.0
        };

        let mut per_village: IndexMap<&str, usize> = IndexMap::new();
        for claim in claims {
            *per_village.entry(claim.village.as_str()).or_default() += 1;
        }
        let mut top_villages: Vec<VillageClaimCount> = per_village
            .into_iter()
            .map(|(village, claims)| VillageClaimCount {
                village: village.to_string(),
                claims,
            })
            .collect();
        top_villages.sort_by(|a, b| b.claims.cmp(&a.claims));
        top_villages.truncate(TOP_VILLAGE_LIMIT);

        Self {
            total_claims: statistics.total_claims,
            approved: statistics.approved,
            pending: statistics.pending,
            under_review: statistics.review,
            rejected: statistics.rejected,
            total_area: statistics.total_hectares,
            approved_area,
            approval_rate_pct,
            top_villages,
        }
    }
}

/// Claims with the given status, or every claim when `status` is `None`.
pub fn filter_by_status(claims: &[ClaimRecord], status: Option<ClaimStatus>) -> Vec<ClaimRecord> {
    claims
        .iter()
        .filter(|claim| status.map_or(true, |wanted| claim.status == wanted))
        .cloned()
        .collect()
}

pub fn search(claims: &[ClaimRecord], query: &str) -> Vec<ClaimRecord> {
    claims
        .iter()
        .filter(|claim| claim.matches_query(query))
        .cloned()
        .collect()
}
