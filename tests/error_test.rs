//! Error-path tests
//!
//! Error display, conversions between the root and common error types,
//! and gazetteer file loading failures.

use place_ai_common::{Error as CommonError, Gazetteer};
use place_ai_rust::error::PlaceAiError;
use std::path::Path;
use tempfile::tempdir;

/// Loading a gazetteer from a missing file
#[test]
fn test_gazetteer_file_not_found() {
    let result = Gazetteer::from_file(Path::new("/nonexistent/path/gazetteer.json"));
    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), CommonError::Io(_)));
}

/// Loading a gazetteer from a file that is not JSON
#[test]
fn test_gazetteer_file_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("gazetteer.json");
    std::fs::write(&path, "not json at all").unwrap();

    let result = Gazetteer::from_file(&path);
    assert!(matches!(result.unwrap_err(), CommonError::Json(_)));
}

/// Loading a valid gazetteer file
#[test]
fn test_gazetteer_file_valid() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("gazetteer.json");
    std::fs::write(
        &path,
        r#"[
            {"canonical_name": "Munsiyari", "district": "Pithoragarh", "category": "hill_station",
             "altitude_m": 2200, "keywords": ["panchachuli", "trek"]},
            {"canonical_name": "Khirsu", "district": "Pauri Garhwal", "category": "nature"}
        ]"#,
    )
    .unwrap();

    let gazetteer = Gazetteer::from_file(&path).expect("should load");
    assert_eq!(gazetteer.len(), 2);
    assert!(gazetteer.lookup_exact("munsiyari").is_some());
}

/// Duplicate canonical names are a load-time failure, not a lookup quirk
#[test]
fn test_gazetteer_file_duplicates_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("gazetteer.json");
    std::fs::write(
        &path,
        r#"[
            {"canonical_name": "Munsiyari", "district": "Pithoragarh", "category": "hill_station"},
            {"canonical_name": "MUNSIYARI", "district": "Pithoragarh", "category": "hill_station"}
        ]"#,
    )
    .unwrap();

    let result = Gazetteer::from_file(&path);
    assert!(result.is_err());

    let display = format!("{}", result.unwrap_err());
    assert!(display.contains("duplicate"));
    assert!(display.contains("munsiyari"));
}

/// PlaceAiError Display implementations
#[test]
fn test_error_display() {
    let errors = vec![
        PlaceAiError::Config("test config error".to_string()),
        PlaceAiError::FileNotFound("response.txt".to_string()),
        PlaceAiError::InvalidGazetteer("bad entry".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty error message: {:?}", err);
    }
}

/// IO error conversion
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PlaceAiError = io_err.into();

    assert!(matches!(err, PlaceAiError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSON error conversion
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: PlaceAiError = json_err.into();

    assert!(matches!(err, PlaceAiError::JsonParse(_)));
}

/// Common error conversion (transparent)
#[test]
fn test_common_error_conversion() {
    let common_err = CommonError::Parse("identification pass: bad response".to_string());
    let err: PlaceAiError = common_err.into();

    assert!(matches!(err, PlaceAiError::Common(_)));
    // transparent: the inner message is shown as-is
    let display = format!("{}", err);
    assert!(display.contains("identification pass"));
}
