//! Approximate key matching for free-text country and month input.
//!
//! User input arrives with typos ("kenye") and partial words ("jan"); this
//! module resolves it against the catalog's canonical keys with an
//! edit-distance score on a 0-100 scale.

use strsim::normalized_levenshtein;

/// Minimum 0-100 score at which a fuzzy match is accepted.
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Length ratio above which windowed partial matching kicks in.
const PARTIAL_LEN_RATIO: f64 = 1.5;

/// Similarity score in [0, 100] between two case-folded strings.
///
/// The base score is normalized Levenshtein similarity over the whole
/// strings. When one string is at least 1.5x longer than the other, the best
/// same-length character window of the longer string is also scored and
/// scaled by 0.9 (0.6 once the lengths differ by 8x or more), and the
/// maximum wins. The window term is what lets "jan" score 90 against
/// "january" while "kenye" still scores a plain 80 against "kenya".
pub fn similarity(a: &str, b: &str) -> f64 {
    let full = normalized_levenshtein(a, b) * 100.0;

    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = shorter.chars().count();
    if short_len == 0 {
        return full;
    }

    let len_ratio = longer.chars().count() as f64 / short_len as f64;
    if len_ratio < PARTIAL_LEN_RATIO {
        return full;
    }

    let scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };
    full.max(best_window_similarity(shorter, longer) * 100.0 * scale)
}

/// Best normalized similarity between `shorter` and any window of `longer`
/// with the same character length.
fn best_window_similarity(shorter: &str, longer: &str) -> f64 {
    let long_chars: Vec<char> = longer.chars().collect();
    let width = shorter.chars().count();

    let mut best = 0.0f64;
    for start in 0..=(long_chars.len() - width) {
        let window: String = long_chars[start..start + width].iter().collect();
        best = best.max(normalized_levenshtein(shorter, &window));
    }
    best
}

/// Resolve free-text input to the best-scoring candidate key, if any
/// candidate reaches `threshold`.
///
/// The input is case-folded before scoring; candidates are expected to be
/// canonical lowercase keys already. When several candidates tie for the top
/// score, the first one in iteration order wins, so resolution over a sorted
/// candidate set is deterministic.
pub fn best_match<'a, I>(input: &str, candidates: I, threshold: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let folded = input.to_lowercase();

    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let score = similarity(&folded, candidate);
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((candidate, score)),
        }
    }

    match best {
        Some((candidate, score)) if score >= threshold => Some(candidate),
        _ => None,
    }
}

/// Key-matching policy used to resolve free-text input to canonical keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchMode {
    /// Approximate matching that tolerates typos and partial strings.
    Fuzzy {
        /// Minimum 0-100 score to accept a candidate.
        threshold: f64,
    },
    /// Case-insensitive equality; never resolves to a non-identical key.
    Exact,
}

impl MatchMode {
    /// Fuzzy matching at [`DEFAULT_THRESHOLD`].
    pub fn fuzzy() -> Self {
        Self::Fuzzy {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Resolve `input` against canonical lowercase candidate keys.
    pub fn resolve<'a, I>(&self, input: &str, candidates: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            Self::Fuzzy { threshold } => best_match(input, candidates, *threshold),
            Self::Exact => {
                let folded = input.to_lowercase();
                candidates.into_iter().find(|candidate| *candidate == folded)
            }
        }
    }
}
