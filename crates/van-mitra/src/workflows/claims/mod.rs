//! Claim registry: dashboard statistics, filtering, search, and review decisions.

pub mod domain;
pub mod importer;
pub mod repository;
pub mod review;
pub mod summary;

#[cfg(test)]
mod tests;

pub use domain::{
    ClaimId, ClaimRecord, ClaimStatus, GeoPoint, UnknownClaimStatus, ValidationScores,
};
pub use importer::{import_claims_csv, import_claims_path, ClaimImportError};
pub use repository::{ClaimRepository, InMemoryClaimRepository, RepositoryError};
pub use review::{ClaimReviewError, ClaimReviewService, ReviewDecision, ReviewOutcome};
pub use summary::{filter_by_status, search, ClaimStatistics, MapSummary, VillageClaimCount};
