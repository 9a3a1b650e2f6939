//! Report enrichment and confidence classification
//!
//! Folds a resolver result and the pass-2 landmark scan into the pass-1
//! record, then grades the merged record:
//! 1. on a gazetteer match, verified fields are added and any in-record
//!    `identification_confidence` is upgraded one step
//! 2. the report-level confidence label is a completeness score over the
//!    merged record, independent of whether a match occurred
//!
//! Either signal alone is an imperfect proxy for correctness, so the two
//! stages are kept independent: a complete record can grade `high`
//! without a database match, and vice versa.

use crate::resolver::MatchResult;
use crate::types::{Confidence, Landmark};
use serde::Serialize;
use serde_json::{Map, Value};

/// Name the model reports when it cannot identify the place
pub const UNKNOWN_PLACE: &str = "Unknown Place";

/// History placeholder for unidentified places
pub const NO_HISTORY: &str = "Information not available";

/// Final identification report: the merged record plus resolution and
/// confidence metadata. Pass-1 fields the enricher does not know about
/// travel through `data` untouched.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceReport {
    pub identified: bool,
    pub confidence: Confidence,
    pub data: Map<String, Value>,
    pub landmarks_detected: usize,
    pub database_matched: bool,
}

/// Merge a pass-1 record, a match result and the pass-2 scan output
/// into the final report.
pub fn enrich(
    mut data: Map<String, Value>,
    result: &MatchResult,
    landmarks: &[Landmark],
    visible_text: &[String],
) -> PlaceReport {
    let database_matched = result.matched && result.entry.is_some();

    if let Some(entry) = result.entry.as_ref().filter(|_| result.matched) {
        data.insert("database_matched".into(), Value::Bool(true));
        data.insert(
            "verified_name".into(),
            Value::String(entry.canonical_name.clone()),
        );
        data.insert(
            "verified_district".into(),
            Value::String(entry.district.clone()),
        );
        data.insert("place_type".into(), Value::String(entry.category.to_string()));
        if let Some(altitude) = entry.altitude_m {
            data.insert("altitude".into(), Value::String(format!("{} meters", altitude)));
        }

        // single-step upgrade of the model's own confidence claim
        let upgraded = data
            .get("identification_confidence")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<Confidence>().ok())
            .map(Confidence::upgraded);
        if let Some(confidence) = upgraded {
            data.insert(
                "identification_confidence".into(),
                Value::String(confidence.to_string()),
            );
        }
    } else {
        data.insert("database_matched".into(), Value::Bool(false));
    }

    if !landmarks.is_empty() {
        data.insert(
            "landmarks".into(),
            serde_json::to_value(landmarks).unwrap_or_default(),
        );
    }
    if !visible_text.is_empty() {
        data.insert(
            "visible_text".into(),
            serde_json::to_value(visible_text).unwrap_or_default(),
        );
    }

    let confidence = completeness_confidence(&data);

    PlaceReport {
        identified: true,
        confidence,
        data,
        landmarks_detected: landmarks.len(),
        database_matched,
    }
}

/// Grade a merged record by data completeness.
///
/// Weights: real name +30, location or district +20, description over
/// 50 chars +15, real history +15, nearby places +10, landmarks +10.
/// 70 and up is high, 40 and up is medium, below that low.
pub fn completeness_confidence(data: &Map<String, Value>) -> Confidence {
    let mut score = 0u32;

    if text_field(data, "name").is_some_and(|name| name != UNKNOWN_PLACE) {
        score += 30;
    }
    if text_field(data, "location").is_some() || text_field(data, "district").is_some() {
        score += 20;
    }
    if text_field(data, "description").is_some_and(|d| d.chars().count() > 50) {
        score += 15;
    }
    if text_field(data, "history").is_some_and(|h| h != NO_HISTORY) {
        score += 15;
    }
    if non_empty_array(data, "nearby_places") {
        score += 10;
    }
    if non_empty_array(data, "landmarks") {
        score += 10;
    }

    if score >= 70 {
        Confidence::High
    } else if score >= 40 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Skeleton report for an unparseable pass-1 response: the raw text is
/// kept as the description so nothing is silently dropped.
pub fn fallback_report(raw_response: &str) -> PlaceReport {
    let mut data = Map::new();
    data.insert("name".into(), Value::String(UNKNOWN_PLACE.into()));
    data.insert("description".into(), Value::String(raw_response.to_string()));
    data.insert("history".into(), Value::String(NO_HISTORY.into()));
    data.insert("best_time_to_visit".into(), Value::String("Year-round".into()));
    data.insert("nearby_places".into(), Value::Array(Vec::new()));
    data.insert("dos_and_donts".into(), Value::Array(Vec::new()));
    data.insert("crowd_level".into(), Value::String("Unknown".into()));
    data.insert("database_matched".into(), Value::Bool(false));

    PlaceReport {
        identified: false,
        confidence: Confidence::Low,
        data,
        landmarks_detected: 0,
        database_matched: false,
    }
}

fn text_field<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    data.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn non_empty_array(data: &Map<String, Value>, key: &str) -> bool {
    data.get(key)
        .and_then(Value::as_array)
        .is_some_and(|a| !a.is_empty())
}
