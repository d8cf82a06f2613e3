use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{ClaimId, ClaimStatus};
use super::repository::{ClaimRepository, RepositoryError};

/// Officer action taken on a claim under review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    Reject {
        /// Omitted reasons deserialize empty and are refused by the review service.
        #[serde(default)]
        reason: String,
    },
    RequestInformation,
}

impl ReviewDecision {
    pub const fn resulting_status(&self) -> ClaimStatus {
        match self {
            ReviewDecision::Approve => ClaimStatus::Approved,
            ReviewDecision::Reject { .. } => ClaimStatus::Rejected,
            ReviewDecision::RequestInformation => ClaimStatus::Review,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewOutcome {
    pub claim_id: ClaimId,
    pub previous_status: ClaimStatus,
    pub status: ClaimStatus,
    pub note: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClaimReviewError {
    #[error("claim {0} not found")]
    NotFound(ClaimId),
    #[error("a reason is required to reject a claim")]
    MissingReason,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Applies review decisions to claims held in a repository.
pub struct ClaimReviewService<R> {
    repository: Arc<R>,
}

impl<R> ClaimReviewService<R>
where
    R: ClaimRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    pub fn decide(
        &self,
        claim_id: ClaimId,
        decision: ReviewDecision,
    ) -> Result<ReviewOutcome, ClaimReviewError> {
        if let ReviewDecision::Reject { reason } = &decision {
            if reason.trim().is_empty() {
                warn!(%claim_id, "rejection submitted without a reason");
                return Err(ClaimReviewError::MissingReason);
            }
        }

        let mut record = self
            .repository
            .fetch(claim_id)?
            .ok_or(ClaimReviewError::NotFound(claim_id))?;

        let previous_status = record.status;
        let status = decision.resulting_status();
        record.status = status;
        self.repository.update(record)?;

        let note = match &decision {
            ReviewDecision::Approve => format!("Claim {claim_id} approved"),
            ReviewDecision::Reject { reason } => {
                format!("Claim {claim_id} rejected: {}", reason.trim())
            }
            ReviewDecision::RequestInformation => {
                format!("Additional information requested for claim {claim_id}")
            }
        };

        info!(
            %claim_id,
            from = previous_status.label(),
            to = status.label(),
            "claim review recorded"
        );

        Ok(ReviewOutcome {
            claim_id,
            previous_status,
            status,
            note,
        })
    }
}
