use std::sync::LazyLock;

use regex::Regex;

use super::domain::ClaimField;

// Compiled once; each pattern has exactly one capture group except coordinates.
static CLAIMANT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Name of Claimant:\s*([^\n]+)").expect("claimant pattern"));

static FATHER_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Father's Name:\s*([^\n]+)").expect("father pattern"));

static VILLAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Village:\s*([^\n]+)").expect("village pattern"));

static PATTA_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Patta Number:\s*([^\n]+)").expect("patta pattern"));

static EXTENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Extent of Land:\s*([0-9.]+)\s*hectares?").expect("extent pattern")
});

static COORDINATES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Coordinates:\s*([0-9.]+)°\s*N,\s*([0-9.]+)°\s*E").expect("coordinates pattern")
});

static SURVEY_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Survey No[.:]\s*([^\n,]+)").expect("survey pattern"));

static DATE_OF_OCCUPATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Date of Occupation:\s*([^\n]+)").expect("occupation date pattern")
});

/// Substring marker and the canonical document name it stands for, in check order.
pub(crate) const DOCUMENT_MARKERS: [(&str, &str); 4] = [
    ("Ration Card", "Ration Card"),
    ("Voter ID", "Voter ID"),
    ("Land Revenue", "Land Revenue Records"),
    ("Witness", "Witness Statements"),
];

pub(crate) fn text_pattern(field: ClaimField) -> Option<&'static Regex> {
    let pattern: &'static LazyLock<Regex> = match field {
        ClaimField::ClaimantName => &CLAIMANT_NAME_RE,
        ClaimField::FatherName => &FATHER_NAME_RE,
        ClaimField::Village => &VILLAGE_RE,
        ClaimField::PattaNumber => &PATTA_NUMBER_RE,
        ClaimField::SurveyNumber => &SURVEY_NUMBER_RE,
        ClaimField::DateOfOccupation => &DATE_OF_OCCUPATION_RE,
        ClaimField::Extent | ClaimField::Coordinates => return None,
    };
    Some(LazyLock::force(pattern))
}

/// First trimmed capture for a free-text field.
pub(crate) fn capture_text(field: ClaimField, text: &str) -> Option<String> {
    let captures = text_pattern(field)?.captures(text)?;
    captures.get(1).map(|value| value.as_str().trim().to_string())
}

pub(crate) fn capture_extent(text: &str) -> Option<f64> {
    let captures = EXTENT_RE.captures(text)?;
    Some(leading_number(captures.get(1)?.as_str()))
}

pub(crate) fn capture_coordinates(text: &str) -> Option<(f64, f64)> {
    let captures = COORDINATES_RE.captures(text)?;
    let lat = leading_number(captures.get(1)?.as_str());
    let lng = leading_number(captures.get(2)?.as_str());
    Some((lat, lng))
}

/// Longest `digits[.digits]` prefix of a `[0-9.]+` capture, so `1.2.3` reads as 1.2.
/// A capture without any leading digit (such as `.` or `..5`) is NaN.
fn leading_number(raw: &str) -> f64 {
    let integer_len = raw.bytes().take_while(u8::is_ascii_digit).count();
    let mut end = integer_len;
    if raw.as_bytes().get(end) == Some(&b'.') {
        let fraction_len = raw[end + 1..].bytes().take_while(u8::is_ascii_digit).count();
        if integer_len > 0 || fraction_len > 0 {
            end += 1 + fraction_len;
        }
    }
    raw[..end].parse().unwrap_or(f64::NAN)
}

pub(crate) fn documents_in(text: &str) -> Vec<String> {
    DOCUMENT_MARKERS
        .iter()
        .filter(|(marker, _)| text.contains(marker))
        .map(|(_, name)| name.to_string())
        .collect()
}
