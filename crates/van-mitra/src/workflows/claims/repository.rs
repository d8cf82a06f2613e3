use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::domain::{ClaimId, ClaimRecord};

/// Storage abstraction for claim records.
pub trait ClaimRepository: Send + Sync {
    fn list(&self) -> Result<Vec<ClaimRecord>, RepositoryError>;
    fn fetch(&self, id: ClaimId) -> Result<Option<ClaimRecord>, RepositoryError>;
    fn update(&self, record: ClaimRecord) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local repository ordered by claim id.
#[derive(Debug, Default, Clone)]
pub struct InMemoryClaimRepository {
    records: Arc<RwLock<BTreeMap<ClaimId, ClaimRecord>>>,
}

impl InMemoryClaimRepository {
    pub fn new(claims: impl IntoIterator<Item = ClaimRecord>) -> Self {
        let records = claims.into_iter().map(|claim| (claim.id, claim)).collect();
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl ClaimRepository for InMemoryClaimRepository {
    fn list(&self) -> Result<Vec<ClaimRecord>, RepositoryError> {
        let guard = self
            .records
            .read()
            .map_err(|_| RepositoryError::Unavailable("claim store poisoned".to_string()))?;
        Ok(guard.values().cloned().collect())
    }

    fn fetch(&self, id: ClaimId) -> Result<Option<ClaimRecord>, RepositoryError> {
        let guard = self
            .records
            .read()
            .map_err(|_| RepositoryError::Unavailable("claim store poisoned".to_string()))?;
        Ok(guard.get(&id).cloned())
    }

    fn update(&self, record: ClaimRecord) -> Result<(), RepositoryError> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| RepositoryError::Unavailable("claim store poisoned".to_string()))?;
        match guard.get_mut(&record.id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}
