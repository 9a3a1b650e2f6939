//! Similarity scoring
//!
//! Pure scoring functions used by the fuzzy resolution pass:
//! - name_similarity: normalized sequence ratio between two names
//! - keyword_boost: flat bonus per corroborating observed keyword
//! - description_boost: flat bonus per place keyword seen in the description
//!
//! All functions are side-effect free and return 0 for empty input.

/// Normalized similarity between two place names, in [0, 1].
///
/// Computed as `2 * lcs(a, b) / (|a| + |b|)` over the lowercased char
/// sequences (a longest-common-subsequence take on difflib's
/// `SequenceMatcher.ratio`). Symmetric in its arguments.
///
/// Raw similarity alone is unreliable for place names with common stems
/// ("Kedarnath" vs "Kedar" scores ~0.71), which is why the resolver adds
/// keyword and description corroboration on top.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let lcs = lcs_length(&a, &b);
    (2.0 * lcs as f64) / ((a.len() + b.len()) as f64)
}

/// Longest common subsequence length, two-row DP
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Keyword corroboration bonus: 0.1 per observed keyword whose lowercase
/// text contains, or is contained in, any of the place's keywords.
///
/// An observed keyword counts once no matter how many place keywords it
/// hits. Blank keywords on either side never match.
pub fn keyword_boost(observed: &[String], entry_keywords: &[String]) -> f64 {
    if observed.is_empty() || entry_keywords.is_empty() {
        return 0.0;
    }

    let matches = observed
        .iter()
        .filter(|kw| {
            let kw = kw.trim().to_lowercase();
            !kw.is_empty()
                && entry_keywords.iter().any(|pk| {
                    let pk = pk.trim().to_lowercase();
                    !pk.is_empty() && (kw.contains(&pk) || pk.contains(&kw))
                })
        })
        .count();

    matches as f64 * 0.1
}

/// Description corroboration bonus: 0.05 per place keyword literally
/// present in the lowercased description.
pub fn description_boost(description: &str, entry_keywords: &[String]) -> f64 {
    let description = description.to_lowercase();
    if description.trim().is_empty() || entry_keywords.is_empty() {
        return 0.0;
    }

    let matches = entry_keywords
        .iter()
        .filter(|pk| {
            let pk = pk.trim().to_lowercase();
            !pk.is_empty() && description.contains(&pk)
        })
        .count();

    matches as f64 * 0.05
}
