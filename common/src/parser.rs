//! Vision response parsing
//!
//! Extracts JSON from the model's free-text responses and parses the
//! two recognition passes:
//! - pass 1: detailed place identification (kept as an opaque object)
//! - pass 2: landmark and feature scan (typed, lenient)

use crate::error::{Error, Result};
use crate::types::{LandmarkScan, RecognitionInput};
use serde_json::{Map, Value};

/// Extract the JSON part of a model response.
///
/// Extraction order:
/// 1. ```json ... ``` fenced block
/// 2. outermost `{ ... }` object
/// 3. outermost `[ ... ]` array
/// 4. error
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(marker) = response.find("```json") {
        let start = marker + 7; // length of "```json"
        if let Some(offset) = response[start..].find("```") {
            return Ok(response[start..start + offset].trim());
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    if let Some(start) = response.find('[') {
        if let Some(end) = response.rfind(']') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("no JSON found in response".into()))
}

/// Parse the pass-1 (detailed identification) response.
///
/// The record is kept as a raw object: the enricher passes fields it
/// does not know about straight through to the report.
pub fn parse_identification(response: &str) -> Result<Map<String, Value>> {
    let json_str = extract_json(response)?;
    let value: Value = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("identification pass: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::Parse("identification pass: expected a JSON object".into())),
    }
}

/// Parse the pass-2 (landmark scan) response
pub fn parse_landmark_scan(response: &str) -> Result<LandmarkScan> {
    let json_str = extract_json(response)?;
    let scan: LandmarkScan = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("landmark pass: {}", e)))?;
    Ok(scan)
}

/// Build the resolver input from both passes: name and description from
/// pass 1, keywords from `famous_for` plus the pass-2 landmark names.
pub fn recognition_input_from(data: &Map<String, Value>, scan: &LandmarkScan) -> RecognitionInput {
    let recognized_name = data
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let description = data
        .get("description")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let mut keywords: Vec<String> = data
        .get("famous_for")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    keywords.extend(
        scan.landmarks
            .iter()
            .filter(|l| !l.name.is_empty())
            .map(|l| l.name.clone()),
    );

    RecognitionInput {
        recognized_name,
        description,
        keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =============================================
    // extract_json
    // =============================================

    #[test]
    fn test_extract_json_fenced_block() {
        let response = "Here is my analysis:\n```json\n{\"name\": \"Kedarnath\"}\n```\nLet me know.";

        let json = extract_json(response).unwrap();
        assert_eq!(json, r#"{"name": "Kedarnath"}"#);
    }

    #[test]
    fn test_extract_json_raw_object() {
        let response = r#"{"name": "Badrinath", "district": "Chamoli"}"#;
        assert_eq!(extract_json(response).unwrap(), response);
    }

    #[test]
    fn test_extract_json_object_with_surrounding_text() {
        let response = r#"Sure! {"name": "Auli"} Hope that helps."#;
        assert_eq!(extract_json(response).unwrap(), r#"{"name": "Auli"}"#);
    }

    #[test]
    fn test_extract_json_nested_objects() {
        let response = r#"{"landmarks": [{"type": "temple"}], "extra": {"k": "v"}}"#;
        let json = extract_json(response).unwrap();
        assert!(json.contains("landmarks"));
        assert!(json.contains("extra"));
    }

    #[test]
    fn test_extract_json_raw_array() {
        let response = r#"Here you go: ["Kedarnath", "Badrinath"] done."#;
        assert_eq!(extract_json(response).unwrap(), r#"["Kedarnath", "Badrinath"]"#);
    }

    #[test]
    fn test_extract_json_object_preferred_over_array() {
        // the array branch only runs when no object is present
        let response = r#"{"nearby_places": ["Gaurikund"]}"#;
        assert_eq!(extract_json(response).unwrap(), response);
    }

    #[test]
    fn test_extract_json_none_found() {
        let result = extract_json("No structured data here, just prose.");
        assert!(result.is_err());
        if let Err(Error::Parse(msg)) = result {
            assert!(msg.contains("no JSON"));
        } else {
            panic!("Expected Parse error");
        }
    }

    #[test]
    fn test_extract_json_empty_response() {
        assert!(extract_json("").is_err());
    }

    // =============================================
    // parse_identification
    // =============================================

    #[test]
    fn test_parse_identification() {
        let response = r#"```json
{
  "name": "Nainital",
  "location": "Nainital, Uttarakhand",
  "description": "A lake town in the Kumaon hills",
  "famous_for": ["Naini Lake", "Mall Road"],
  "identification_confidence": "medium"
}
```"#;

        let data = parse_identification(response).unwrap();
        assert_eq!(data["name"], json!("Nainital"));
        assert_eq!(data["famous_for"], json!(["Naini Lake", "Mall Road"]));
        assert_eq!(data["identification_confidence"], json!("medium"));
    }

    #[test]
    fn test_parse_identification_not_an_object() {
        // fenced array is valid JSON but not a record
        let response = "```json\n[1, 2, 3]\n```";
        let result = parse_identification(response);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_identification_invalid_json() {
        let response = "{ this is not json }";
        assert!(parse_identification(response).is_err());
    }

    // =============================================
    // parse_landmark_scan
    // =============================================

    #[test]
    fn test_parse_landmark_scan() {
        let response = r#"{
            "landmarks": [
                {"type": "temple", "name": "Naina Devi Temple", "confidence": "high"},
                {"type": "lake", "name": "Naini Lake"}
            ],
            "visible_text": ["Boat House Club"],
            "architectural_style": "colonial hill architecture",
            "natural_features": ["lake", "oak forest"]
        }"#;

        let scan = parse_landmark_scan(response).unwrap();
        assert_eq!(scan.landmarks.len(), 2);
        assert_eq!(scan.landmarks[0].name, "Naina Devi Temple");
        assert_eq!(scan.landmarks[1].landmark_type, "lake");
        assert_eq!(scan.visible_text, vec!["Boat House Club"]);
        assert_eq!(scan.natural_features.len(), 2);
    }

    #[test]
    fn test_parse_landmark_scan_minimal() {
        let scan = parse_landmark_scan(r#"{"landmarks": []}"#).unwrap();
        assert!(scan.landmarks.is_empty());
        assert!(scan.visible_text.is_empty());
    }

    #[test]
    fn test_parse_landmark_scan_no_json() {
        assert!(parse_landmark_scan("nothing here").is_err());
    }

    // =============================================
    // recognition_input_from
    // =============================================

    #[test]
    fn test_recognition_input_combines_keywords() {
        let data = parse_identification(
            r#"{"name": "Nainital", "description": "a lake town", "famous_for": ["boats"]}"#,
        )
        .unwrap();
        let scan = parse_landmark_scan(
            r#"{"landmarks": [{"type": "temple", "name": "Naina Devi Temple"}, {"type": "hill"}]}"#,
        )
        .unwrap();

        let input = recognition_input_from(&data, &scan);
        assert_eq!(input.recognized_name, "Nainital");
        assert_eq!(input.description.as_deref(), Some("a lake town"));
        // famous_for first, then named landmarks; unnamed ones skipped
        assert_eq!(input.keywords, vec!["boats", "Naina Devi Temple"]);
    }

    #[test]
    fn test_recognition_input_missing_fields() {
        let data = parse_identification(r#"{"history": "old"}"#).unwrap();
        let input = recognition_input_from(&data, &LandmarkScan::default());

        assert_eq!(input.recognized_name, "");
        assert!(input.description.is_none());
        assert!(input.keywords.is_empty());
    }
}
