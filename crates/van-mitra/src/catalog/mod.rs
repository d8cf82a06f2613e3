//! Scheme knowledge base, village profiles, and demo claims.
//!
//! The built-in data mirrors the dashboard's demo set. Every collection can also be loaded from a
//! file so the engine never relies on baked-in constants.

mod standard;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::workflows::claims::{self, ClaimImportError, ClaimRecord};
use crate::workflows::schemes::{SchemeCode, SchemeDefinition, VillageProfile};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Claims(#[from] ClaimImportError),
    #[error("invalid catalog entry: {0}")]
    Invalid(String),
}

/// Ordered scheme catalog. Order matters: it breaks ties between equal scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemeCatalog {
    schemes: Vec<SchemeDefinition>,
}

impl SchemeCatalog {
    /// Validated catalog built from explicit definitions.
    pub fn new(schemes: Vec<SchemeDefinition>) -> Result<Self, CatalogError> {
        validate_schemes(&schemes)?;
        Ok(Self { schemes })
    }

    /// The six schemes of the built-in knowledge base.
    pub fn standard() -> Self {
        Self {
            schemes: standard::schemes(),
        }
    }

    /// Load a JSON array of scheme definitions.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let schemes: Vec<SchemeDefinition> = serde_json::from_reader(reader)?;
        Self::new(schemes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let catalog = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(path = %path.display(), schemes = catalog.len(), "scheme catalog loaded");
        Ok(catalog)
    }

    pub fn schemes(&self) -> &[SchemeDefinition] {
        &self.schemes
    }

    pub fn get(&self, code: &SchemeCode) -> Option<&SchemeDefinition> {
        self.schemes.iter().find(|scheme| &scheme.code == code)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

impl Default for SchemeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_schemes(schemes: &[SchemeDefinition]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for scheme in schemes {
        if !seen.insert(&scheme.code) {
            return Err(CatalogError::Invalid(format!(
                "duplicate scheme code {}",
                scheme.code
            )));
        }
        if scheme.indicator_weights.is_empty() {
            return Err(CatalogError::Invalid(format!(
                "scheme {} defines no indicator weights",
                scheme.code
            )));
        }
        if let Some((indicator, weight)) = scheme
            .indicator_weights
            .iter()
            .find(|(_, weight)| !(0.0..=1.0).contains(*weight))
        {
            return Err(CatalogError::Invalid(format!(
                "scheme {} weight for {indicator} is {weight}, expected 0..=1",
                scheme.code
            )));
        }
    }
    Ok(())
}

pub fn standard_villages() -> Vec<VillageProfile> {
    standard::villages()
}

pub fn standard_claims() -> Vec<ClaimRecord> {
    standard::claims()
}

/// Load a JSON array of village profiles, rejecting indicators outside 0..=100.
pub fn load_villages<R: Read>(reader: R) -> Result<Vec<VillageProfile>, CatalogError> {
    let villages: Vec<VillageProfile> = serde_json::from_reader(reader)?;
    validate_villages(&villages)?;
    Ok(villages)
}

pub fn load_villages_path(path: impl AsRef<Path>) -> Result<Vec<VillageProfile>, CatalogError> {
    let path = path.as_ref();
    let villages = load_villages(BufReader::new(File::open(path)?))?;
    info!(path = %path.display(), villages = villages.len(), "village profiles loaded");
    Ok(villages)
}

pub fn load_claims_path(path: impl AsRef<Path>) -> Result<Vec<ClaimRecord>, CatalogError> {
    let path = path.as_ref();
    let records = claims::import_claims_path(path)?;
    info!(path = %path.display(), claims = records.len(), "claims loaded");
    Ok(records)
}

pub fn validate_villages(villages: &[VillageProfile]) -> Result<(), CatalogError> {
    for village in villages {
        if village.tribal_population_pct > 100 || village.forest_cover_pct > 100 {
            return Err(CatalogError::Invalid(format!(
                "village {} has a percentage above 100",
                village.name
            )));
        }
        if let Some((indicator, value)) = village
            .indicators
            .iter()
            .find(|(_, value)| !(0.0..=100.0).contains(*value))
        {
            return Err(CatalogError::Invalid(format!(
                "village {} indicator {indicator} is {value}, expected 0..=100",
                village.name
            )));
        }
    }
    Ok(())
}

/// Find a village by numeric id or case-insensitive name.
pub fn find_village<'a>(villages: &'a [VillageProfile], key: &str) -> Option<&'a VillageProfile> {
    let key = key.trim();
    if let Ok(id) = key.parse::<u32>() {
        return villages.iter().find(|village| village.id == id);
    }
    villages
        .iter()
        .find(|village| village.name.eq_ignore_ascii_case(key))
}
