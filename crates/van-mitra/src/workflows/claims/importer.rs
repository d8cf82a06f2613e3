use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{ClaimId, ClaimRecord, ClaimStatus, GeoPoint, ValidationScores};

/// Error raised while loading a claims CSV export.
#[derive(Debug, thiserror::Error)]
pub enum ClaimImportError {
    #[error("failed to read claims export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid claims CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}

pub fn import_claims_path(path: impl AsRef<Path>) -> Result<Vec<ClaimRecord>, ClaimImportError> {
    let file = File::open(path)?;
    import_claims_csv(file)
}

/// Parse claims from CSV with a header row. Documents are `;`-separated; the three
/// `*_match` validation columns are optional but must be given together. Claim ids must be unique.
pub fn import_claims_csv<R: Read>(reader: R) -> Result<Vec<ClaimRecord>, ClaimImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut claims = Vec::new();
    let mut seen = HashSet::new();

    for (index, record) in csv_reader.deserialize::<ClaimRow>().enumerate() {
        let row_number = index + 1;
        let claim = record?.into_record(row_number)?;
        if !seen.insert(claim.id) {
            return Err(ClaimImportError::InvalidRow {
                row: row_number,
                message: format!("duplicate claim id {}", claim.id),
            });
        }
        claims.push(claim);
    }

    Ok(claims)
}

#[derive(Debug, Deserialize)]
struct ClaimRow {
    id: u32,
    claimant_name: String,
    patta_number: String,
    extent_hectares: f64,
    village: String,
    status: String,
    confidence: u8,
    lat: f64,
    lng: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    documents: Option<String>,
    #[serde(default)]
    name_match: Option<u8>,
    #[serde(default)]
    location_match: Option<u8>,
    #[serde(default)]
    extent_match: Option<u8>,
}

impl ClaimRow {
    fn into_record(self, row: usize) -> Result<ClaimRecord, ClaimImportError> {
        let status: ClaimStatus =
            self.status
                .parse()
                .map_err(|err: super::domain::UnknownClaimStatus| {
                    ClaimImportError::InvalidRow {
                        row,
                        message: err.to_string(),
                    }
                })?;

        if self.confidence > 100 {
            return Err(ClaimImportError::InvalidRow {
                row,
                message: format!("confidence {} exceeds 100", self.confidence),
            });
        }

        let validation = match (self.name_match, self.location_match, self.extent_match) {
            (Some(name_match), Some(location_match), Some(extent_match)) => {
                Some(ValidationScores {
                    name_match,
                    location_match,
                    extent_match,
                })
            }
            (None, None, None) => None,
            _ => {
                return Err(ClaimImportError::InvalidRow {
                    row,
                    message: "validation scores must be provided together".to_string(),
                })
            }
        };

        let documents = self
            .documents
            .map(|raw| {
                raw.split(';')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(ClaimRecord {
            id: ClaimId(self.id),
            claimant_name: self.claimant_name,
            patta_number: self.patta_number,
            extent_hectares: self.extent_hectares,
            village: self.village,
            status,
            confidence: self.confidence,
            location: GeoPoint {
                lat: self.lat,
                lng: self.lng,
            },
            documents,
            validation,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
