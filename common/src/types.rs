//! Shared type definitions
//!
//! Types exchanged between the vision-response parser, the resolver and
//! the enricher:
//! - RecognitionInput: what the resolver consumes (name + hints)
//! - Landmark / LandmarkScan: pass-2 (landmark detection) output
//! - Confidence: coarse high/medium/low identification label

use serde::{Deserialize, Serialize};

/// One resolution request, built from the vision model's output.
///
/// `recognized_name` may be empty or garbled; the resolver treats a
/// blank name as an immediate "no match".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionInput {
    pub recognized_name: String,
    pub description: Option<String>,
    /// Keyword hints: `famous_for` entries plus landmark names from the
    /// second recognition pass. Order carries no meaning.
    pub keywords: Vec<String>,
}

impl RecognitionInput {
    pub fn from_name(name: &str) -> Self {
        Self {
            recognized_name: name.to_string(),
            ..Default::default()
        }
    }
}

/// A single landmark reported by the pass-2 scan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Landmark {
    #[serde(rename = "type")]
    pub landmark_type: String,
    pub name: String,
    pub description: String,
    pub confidence: String,
}

/// Pass-2 output: landmarks and distinctive features seen in the image
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkScan {
    pub landmarks: Vec<Landmark>,
    pub visible_text: Vec<String>,
    pub architectural_style: String,
    pub natural_features: Vec<String>,
}

/// Identification confidence label
///
/// Ordering is Low < Medium < High so upgrade logic can compare labels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    #[default]
    Medium,
    High,
}

impl Confidence {
    /// Single-step upgrade applied on a gazetteer match.
    /// Never skips a level; `High` stays `High`.
    pub fn upgraded(self) -> Self {
        match self {
            Confidence::Low => Confidence::Medium,
            Confidence::Medium => Confidence::High,
            Confidence::High => Confidence::High,
        }
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            _ => Err(format!("Unknown confidence: {}. Use high, medium, or low", s)),
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}
