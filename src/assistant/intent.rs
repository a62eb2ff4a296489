use std::sync::LazyLock;

use regex::Regex;

use super::types::Intent;

/// Medicine-seeking templates, tried first and in this order. The first
/// pattern that matches anywhere in the lowered query wins, so order is
/// part of the classifier's behavior.
const MEDICINE_TEMPLATES: &[&str] = &[
    "medicine for (.+)",
    "treat(?:ment)? for (.+)",
    "i have (.+)",
    "suffering from (.+)",
    "medication for (.+)",
    "prescription for (.+)",
    "remedy for (.+)",
    "cure for (.+)",
    "help (?:with|for) (.+)",
    "medicine (?:that treats|for treating) (.+)",
];

/// Doctor-seeking templates, tried only when no medicine template matched.
/// The suffix forms overlap ("X specialist" vs "X doctor"), so order
/// matters here too.
const DOCTOR_TEMPLATES: &[&str] = &[
    "doctor(?:s)? (?:for|who treat(?:s)?|specialized in) (.+)",
    "find (?:a )?doctor (?:for|who treat(?:s)?|specialized in) (.+)",
    "specialist(?:s)? in (.+)",
    "specialists for (.+)",
    "doctors who can treat (.+)",
    "(.+) specialist",
    "(.+) doctor",
];

static MEDICINE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(MEDICINE_TEMPLATES));
static DOCTOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(DOCTOR_TEMPLATES));
static RE_ALLERGY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("allerg(?:ic|y) to (.+)").unwrap());

fn compile(templates: &[&str]) -> Vec<Regex> {
    templates.iter().map(|t| Regex::new(t).unwrap()).collect()
}

/// Classify a free-text query into an [`Intent`].
/// Pure function of the query string; captured subjects are kept exactly
/// as matched (no trimming here).
pub fn classify(query: &str) -> Intent {
    let query = query.to_lowercase();

    for pattern in MEDICINE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&query) {
            if let Some(condition) = caps.get(1) {
                return Intent::MedicineRecommendation {
                    condition: condition.as_str().to_string(),
                    // The allergy clause can sit anywhere in the query,
                    // not only inside the captured condition clause.
                    allergies: extract_allergies(&query),
                };
            }
        }
    }

    for pattern in DOCTOR_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&query) {
            if let Some(specialty) = caps.get(1) {
                return Intent::FindDoctors {
                    specialty: specialty.as_str().to_string(),
                };
            }
        }
    }

    Intent::Unknown
}

/// Extract allergy mentions from a lowered query: the clause after
/// "allergic to"/"allergy to", comma-split, each segment trimmed.
fn extract_allergies(query: &str) -> Vec<String> {
    match RE_ALLERGY.captures(query).and_then(|caps| caps.get(1)) {
        Some(clause) => clause
            .as_str()
            .split(',')
            .map(|segment| segment.trim().to_string())
            .collect(),
        None => Vec::new(),
    }
}
