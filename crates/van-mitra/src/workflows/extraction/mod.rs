//! Rule-based extraction of claim fields from OCR text of an FRA claim form.
//!
//! The rule set is closed: one anchored pattern per field, no fuzzy matching. A field whose
//! anchor is missing stays empty and gets no confidence entry.

pub mod domain;
mod patterns;

pub use domain::{ClaimField, Coordinates, ExtractedClaimFields, FieldConfidence};

use tracing::debug;

/// Extractor carrying the confidence table applied to matched fields.
#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    confidence: FieldConfidence,
}

impl FieldExtractor {
    pub fn new(confidence: FieldConfidence) -> Self {
        Self { confidence }
    }

    pub fn confidence(&self) -> &FieldConfidence {
        &self.confidence
    }

    pub fn extract(&self, raw_text: &str) -> ExtractedClaimFields {
        let mut extracted = ExtractedClaimFields::default();

        if let Some(name) = self.matched_text(&mut extracted, ClaimField::ClaimantName, raw_text) {
            extracted.claimant_name = name;
        }
        if let Some(name) = self.matched_text(&mut extracted, ClaimField::FatherName, raw_text) {
            extracted.father_name = name;
        }
        if let Some(village) = self.matched_text(&mut extracted, ClaimField::Village, raw_text) {
            extracted.village = village;
        }
        if let Some(patta) = self.matched_text(&mut extracted, ClaimField::PattaNumber, raw_text) {
            extracted.patta_number = patta;
        }

        if let Some(extent) = patterns::capture_extent(raw_text) {
            extracted.extent_hectares = extent;
            self.record(&mut extracted, ClaimField::Extent);
        }

        if let Some((lat, lng)) = patterns::capture_coordinates(raw_text) {
            extracted.coordinates = Coordinates { lat, lng };
            self.record(&mut extracted, ClaimField::Coordinates);
        }

        if let Some(survey) = self.matched_text(&mut extracted, ClaimField::SurveyNumber, raw_text)
        {
            extracted.survey_number = survey;
        }

        extracted.documents = patterns::documents_in(raw_text);

        if let Some(date) =
            self.matched_text(&mut extracted, ClaimField::DateOfOccupation, raw_text)
        {
            extracted.date_of_occupation = date;
        }

        debug!(
            fields = extracted.confidence.len(),
            documents = extracted.documents.len(),
            "claim fields extracted"
        );

        extracted
    }

    /// Captures a text field and records its confidence when the anchor is present.
    fn matched_text(
        &self,
        extracted: &mut ExtractedClaimFields,
        field: ClaimField,
        raw_text: &str,
    ) -> Option<String> {
        let value = patterns::capture_text(field, raw_text)?;
        self.record(extracted, field);
        Some(value)
    }

    fn record(&self, extracted: &mut ExtractedClaimFields, field: ClaimField) {
        extracted
            .confidence
            .insert(field, self.confidence.for_field(field));
    }
}

/// Extract claim fields with the default confidence table.
pub fn extract_fields(raw_text: &str) -> ExtractedClaimFields {
    FieldExtractor::default().extract(raw_text)
}

/// Sample Form A text as produced by the OCR step, useful for demos.
pub const SAMPLE_FORM_A: &str = "\
FORM A - CLAIM FOR RIGHTS TO FOREST LAND

Name of Claimant: Rajesh Kumar Singh
Father's Name: Ram Prasad Singh
Village: Kakraban
Gram Sabha: Kakraban Panchayat
Tehsil: Khowai
District: Tripura

Patta Number: IFR-Tri-Khowai-2025-0022

Nature of Right: Individual Forest Right
Extent of Land: 3.5 hectares
Location: Survey No. 245/2, Kakraban Forest
Coordinates: 23.4567° N, 78.9234° E

Date of Occupation: Before December 2005
Purpose: Cultivation and Minor Forest Produce Collection

Supporting Documents:
- Ration Card Number: TRP/KKB/2015/456789
- Voter ID: TRP1234567
- Land Revenue Records
- Witness Statements

Date of Application: 15th September 2025
Signature: [Signature]
";
