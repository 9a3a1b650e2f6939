//! Place AI Common Library
//!
//! The place recognition core shared by the CLI: gazetteer reference
//! data, similarity scoring, three-pass resolution, response parsing
//! and report enrichment.

pub mod enricher;
pub mod error;
pub mod gazetteer;
pub mod parser;
pub mod resolver;
pub mod scorer;
pub mod types;

pub use enricher::{enrich, fallback_report, PlaceReport};
pub use error::{Error, Result};
pub use gazetteer::{Category, Gazetteer, GazetteerEntry};
pub use parser::{extract_json, parse_identification, parse_landmark_scan, recognition_input_from};
pub use resolver::{MatchResult, MatchStrategy, PlaceResolver, FUZZY_MATCH_THRESHOLD};
pub use types::{Confidence, Landmark, LandmarkScan, RecognitionInput};
