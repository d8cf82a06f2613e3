use std::sync::Arc;

use crate::catalog::standard_claims;
use crate::workflows::claims::repository::{ClaimRepository, RepositoryError};
use crate::workflows::claims::{ClaimId, ClaimRecord, ClaimReviewService, InMemoryClaimRepository};

pub(super) fn claims() -> Vec<ClaimRecord> {
    standard_claims()
}

pub(super) fn review_service() -> ClaimReviewService<InMemoryClaimRepository> {
    ClaimReviewService::new(Arc::new(InMemoryClaimRepository::new(claims())))
}

/// Repository whose backing store is always offline.
pub(super) struct UnavailableRepository;

impl ClaimRepository for UnavailableRepository {
    fn list(&self) -> Result<Vec<ClaimRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: ClaimId) -> Result<Option<ClaimRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn update(&self, _record: ClaimRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}
