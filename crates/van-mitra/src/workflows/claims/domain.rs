use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(pub u32);

impl std::fmt::Display for ClaimId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Adjudication state of an FRA claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Pending,
    Approved,
    #[serde(alias = "under-review", alias = "under_review")]
    Review,
    Rejected,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::Pending,
        ClaimStatus::Approved,
        ClaimStatus::Review,
        ClaimStatus::Rejected,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Review => "review",
            ClaimStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClaimStatus(pub String);

impl std::fmt::Display for UnknownClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown claim status '{}' (expected pending, approved, review, or rejected)",
            self.0
        )
    }
}

impl std::error::Error for UnknownClaimStatus {}

impl FromStr for ClaimStatus {
    type Err = UnknownClaimStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "review" | "under-review" | "under_review" => Ok(Self::Review),
            "rejected" => Ok(Self::Rejected),
            _ => Err(UnknownClaimStatus(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Per-aspect verification scores (0-100) attached to a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationScores {
    pub name_match: u8,
    pub location_match: u8,
    pub extent_match: u8,
}

/// Registered individual forest rights claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub id: ClaimId,
    pub claimant_name: String,
    pub patta_number: String,
    pub extent_hectares: f64,
    pub village: String,
    pub status: ClaimStatus,
    pub confidence: u8,
    pub location: GeoPoint,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationScores>,
}

impl ClaimRecord {
    /// Case-insensitive match on claimant, village, or patta number.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [&self.claimant_name, &self.village, &self.patta_number]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
