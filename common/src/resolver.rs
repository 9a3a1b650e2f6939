//! Place resolution
//!
//! Matches a recognition result against the gazetteer through three
//! passes, cheapest first:
//! 1. exact canonical-name match
//! 2. loose alias match (substring containment either way)
//! 3. fuzzy scan: best name similarity plus keyword/description boosts,
//!    accepted at or above [`FUZZY_MATCH_THRESHOLD`]
//!
//! A miss is a normal outcome, reported as `MatchResult { matched: false }`.

use crate::gazetteer::{Gazetteer, GazetteerEntry};
use crate::scorer;
use crate::types::RecognitionInput;
use serde::Serialize;

/// Minimum fuzzy score (similarity + boosts) to accept a match.
/// Inclusive: exactly 0.6 matches.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.6;

/// Which pass produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    Exact,
    Alias,
    Fuzzy,
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStrategy::Exact => write!(f, "exact"),
            MatchStrategy::Alias => write!(f, "alias"),
            MatchStrategy::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// Resolution outcome. `score` is only meaningful when `matched`;
/// exact and alias hits report 1.0, fuzzy hits report the boosted score
/// (which may exceed 1.0 when corroboration is strong).
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    pub entry: Option<GazetteerEntry>,
    pub score: f64,
    pub strategy: Option<MatchStrategy>,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self {
            matched: false,
            entry: None,
            score: 0.0,
            strategy: None,
        }
    }

    pub fn found(entry: GazetteerEntry, score: f64, strategy: MatchStrategy) -> Self {
        Self {
            matched: true,
            entry: Some(entry),
            score,
            strategy: Some(strategy),
        }
    }
}

/// Stateless resolver over an injected gazetteer. Construct once at
/// startup and share by reference; every call is a pure computation.
#[derive(Debug, Clone)]
pub struct PlaceResolver {
    gazetteer: Gazetteer,
}

impl PlaceResolver {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    /// Resolve a recognition result to the best gazetteer entry, or
    /// report no confident match.
    pub fn resolve(&self, input: &RecognitionInput) -> MatchResult {
        let name = input.recognized_name.trim();
        if name.is_empty() {
            return MatchResult::no_match();
        }

        if let Some(entry) = self.gazetteer.lookup_exact(name) {
            return MatchResult::found(entry.clone(), 1.0, MatchStrategy::Exact);
        }

        if let Some(entry) = self.gazetteer.lookup_alias(name) {
            return MatchResult::found(entry.clone(), 1.0, MatchStrategy::Alias);
        }

        self.fuzzy_pass(name, input)
    }

    /// Full scan: per entry, the best of canonical-name and alias
    /// similarity, raised by keyword and description corroboration.
    /// First entry wins ties (strictly-greater tracking over the
    /// deterministic dataset order).
    fn fuzzy_pass(&self, name: &str, input: &RecognitionInput) -> MatchResult {
        let mut best: Option<(&GazetteerEntry, f64)> = None;

        for entry in self.gazetteer.entries() {
            let mut score = scorer::name_similarity(name, &entry.canonical_name);
            for alias in &entry.aliases {
                score = score.max(scorer::name_similarity(name, alias));
            }

            score += scorer::keyword_boost(&input.keywords, &entry.keywords);
            if let Some(description) = &input.description {
                score += scorer::description_boost(description, &entry.keywords);
            }

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((entry, score));
            }
        }

        match best {
            Some((entry, score)) if score >= FUZZY_MATCH_THRESHOLD => {
                MatchResult::found(entry.clone(), score, MatchStrategy::Fuzzy)
            }
            _ => MatchResult::no_match(),
        }
    }
}
