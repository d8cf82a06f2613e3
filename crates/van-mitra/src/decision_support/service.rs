use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::catalog::{self, CatalogError, SchemeCatalog};
use crate::config::DataConfig;
use crate::error::AppError;
use crate::workflows::claims::{
    filter_by_status, search, ClaimId, ClaimRecord, ClaimRepository, ClaimReviewService,
    ClaimStatistics, ClaimStatus, InMemoryClaimRepository, MapSummary, ReviewDecision,
    ReviewOutcome,
};
use crate::workflows::extraction::{ExtractedClaimFields, FieldExtractor};
use crate::workflows::schemes::{AnalysisResult, RecommendationEngine, VillageProfile};

/// Facade tying the knowledge base, the engines, and the claim store together for callers such
/// as the HTTP router and the CLI.
pub struct DecisionSupportService<R> {
    catalog: SchemeCatalog,
    villages: Vec<VillageProfile>,
    engine: RecommendationEngine,
    extractor: FieldExtractor,
    reviews: ClaimReviewService<R>,
}

impl DecisionSupportService<InMemoryClaimRepository> {
    /// Built-in schemes, villages, and demo claims.
    pub fn standard() -> Self {
        Self::new(
            SchemeCatalog::standard(),
            catalog::standard_villages(),
            Arc::new(InMemoryClaimRepository::new(catalog::standard_claims())),
        )
    }

    /// Loads each configured data file, falling back to built-in data for unset paths.
    pub fn from_config(data: &DataConfig) -> Result<Self, CatalogError> {
        let schemes = match &data.scheme_catalog {
            Some(path) => SchemeCatalog::from_path(path)?,
            None => SchemeCatalog::standard(),
        };
        let villages = match &data.village_data {
            Some(path) => catalog::load_villages_path(path)?,
            None => catalog::standard_villages(),
        };
        let claims = match &data.claims_csv {
            Some(path) => catalog::load_claims_path(path)?,
            None => catalog::standard_claims(),
        };

        info!(
            schemes = schemes.len(),
            villages = villages.len(),
            claims = claims.len(),
            "decision support data ready"
        );

        Ok(Self::new(
            schemes,
            villages,
            Arc::new(InMemoryClaimRepository::new(claims)),
        ))
    }
}

impl<R> DecisionSupportService<R>
where
    R: ClaimRepository + 'static,
{
    pub fn new(catalog: SchemeCatalog, villages: Vec<VillageProfile>, repository: Arc<R>) -> Self {
        Self {
            catalog,
            villages,
            engine: RecommendationEngine::default(),
            extractor: FieldExtractor::default(),
            reviews: ClaimReviewService::new(repository),
        }
    }

    pub fn with_extractor(mut self, extractor: FieldExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }

    pub fn villages(&self) -> &[VillageProfile] {
        &self.villages
    }

    pub fn village(&self, key: &str) -> Result<&VillageProfile, AppError> {
        catalog::find_village(&self.villages, key)
            .ok_or_else(|| AppError::NotFound(format!("village '{}'", key.trim())))
    }

    /// Ranks the configured catalog for a known village.
    pub fn recommend_for(
        &self,
        key: &str,
        analysis_date: NaiveDate,
    ) -> Result<AnalysisResult, AppError> {
        let village = self.village(key)?;
        Ok(self
            .engine
            .analyze(village, self.catalog.schemes(), analysis_date))
    }

    /// Ranks a caller-supplied profile, optionally against a caller-supplied catalog.
    pub fn recommend_profile(
        &self,
        village: &VillageProfile,
        schemes: Option<&SchemeCatalog>,
        analysis_date: NaiveDate,
    ) -> AnalysisResult {
        let schemes = schemes.unwrap_or(&self.catalog);
        self.engine.analyze(village, schemes.schemes(), analysis_date)
    }

    pub fn extract(&self, raw_text: &str) -> ExtractedClaimFields {
        self.extractor.extract(raw_text)
    }

    /// Claims filtered by status, then narrowed by a free-text query when one is given.
    pub fn claims(
        &self,
        status: Option<ClaimStatus>,
        query: Option<&str>,
    ) -> Result<Vec<ClaimRecord>, AppError> {
        let all = self.reviews.repository().list()?;
        let filtered = filter_by_status(&all, status);
        Ok(match query.map(str::trim).filter(|query| !query.is_empty()) {
            Some(query) => search(&filtered, query),
            None => filtered,
        })
    }

    pub fn statistics(&self) -> Result<ClaimStatistics, AppError> {
        let all = self.reviews.repository().list()?;
        Ok(ClaimStatistics::from_claims(&all))
    }

    pub fn map_summary(&self) -> Result<MapSummary, AppError> {
        let all = self.reviews.repository().list()?;
        Ok(MapSummary::from_claims(&all))
    }

    pub fn decide(
        &self,
        claim_id: ClaimId,
        decision: ReviewDecision,
    ) -> Result<ReviewOutcome, AppError> {
        self.reviews.decide(claim_id, decision).map_err(|error| {
            warn!(%claim_id, %error, "claim review failed");
            AppError::from(error)
        })
    }
}
