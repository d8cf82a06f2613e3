//! Service facade and HTTP router over the scheme, extraction, and claim workflows.

pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use router::{
    decision_support_router, AnalysisDateQuery, ClaimQuery, ClaimSummaryResponse,
    ExtractionRequest, RecommendationRequest,
};
pub use service::DecisionSupportService;
