use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fields the extractor can populate. Used to key confidence scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimField {
    ClaimantName,
    FatherName,
    Village,
    PattaNumber,
    Extent,
    Coordinates,
    SurveyNumber,
    DateOfOccupation,
}

impl ClaimField {
    pub const ALL: [ClaimField; 8] = [
        ClaimField::ClaimantName,
        ClaimField::FatherName,
        ClaimField::Village,
        ClaimField::PattaNumber,
        ClaimField::Extent,
        ClaimField::Coordinates,
        ClaimField::SurveyNumber,
        ClaimField::DateOfOccupation,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ClaimField::ClaimantName => "Claimant name",
            ClaimField::FatherName => "Father's name",
            ClaimField::Village => "Village",
            ClaimField::PattaNumber => "Patta number",
            ClaimField::Extent => "Extent (ha)",
            ClaimField::Coordinates => "Coordinates",
            ClaimField::SurveyNumber => "Survey number",
            ClaimField::DateOfOccupation => "Date of occupation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Structured fields pulled from the text of an FRA claim form.
///
/// Every field starts at its empty value and is overwritten only when its pattern matches; a
/// populated field always has a matching entry in `confidence`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractedClaimFields {
    pub claimant_name: String,
    pub father_name: String,
    pub village: String,
    pub patta_number: String,
    pub extent_hectares: f64,
    pub coordinates: Coordinates,
    pub survey_number: String,
    pub date_of_occupation: String,
    pub documents: Vec<String>,
    pub confidence: BTreeMap<ClaimField, u8>,
}

impl ExtractedClaimFields {
    pub fn confidence_for(&self, field: ClaimField) -> Option<u8> {
        self.confidence.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.confidence.is_empty() && self.documents.is_empty()
    }
}

/// Confidence assigned to each field when its pattern matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfidence {
    pub claimant_name: u8,
    pub father_name: u8,
    pub village: u8,
    pub patta_number: u8,
    pub extent: u8,
    pub coordinates: u8,
    pub survey_number: u8,
    pub date_of_occupation: u8,
}

impl Default for FieldConfidence {
    fn default() -> Self {
        Self {
            claimant_name: 95,
            father_name: 92,
            village: 98,
            patta_number: 100,
            extent: 97,
            coordinates: 94,
            survey_number: 90,
            date_of_occupation: 88,
        }
    }
}

impl FieldConfidence {
    pub fn for_field(&self, field: ClaimField) -> u8 {
        match field {
            ClaimField::ClaimantName => self.claimant_name,
            ClaimField::FatherName => self.father_name,
            ClaimField::Village => self.village,
            ClaimField::PattaNumber => self.patta_number,
            ClaimField::Extent => self.extent,
            ClaimField::Coordinates => self.coordinates,
            ClaimField::SurveyNumber => self.survey_number,
            ClaimField::DateOfOccupation => self.date_of_occupation,
        }
    }
}
