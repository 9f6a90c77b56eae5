//! Adapters over the string metric libraries.
//!
//! All functions take the candidate first and the query second.

use rapidfuzz::distance;

use crate::core::{Metric, Score};

/// Round to 3 decimal places
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Round to 3 decimal places, ties to even
pub fn round3_half_even(value: f64) -> f64 {
    (value * 1000.0).round_ties_even() / 1000.0
}

/// Differing positions over the common length, plus the length difference
pub fn hamming(candidate: &str, query: &str) -> usize {
    let len_candidate = candidate.chars().count();
    let len_query = query.chars().count();
    let common = len_candidate.min(len_query);

    let mismatches = strsim::generic_hamming(
        candidate.chars().take(common),
        query.chars().take(common),
    )
    .unwrap_or(common);

    mismatches + len_candidate.abs_diff(len_query)
}

pub fn levenshtein(candidate: &str, query: &str) -> usize {
    distance::levenshtein::distance(candidate.chars(), query.chars())
}

pub fn damerau_levenshtein(candidate: &str, query: &str) -> usize {
    distance::damerau_levenshtein::distance(candidate.chars(), query.chars())
}

/// Jaro similarity (0.0 - 1.0), unrounded
pub fn jaro(candidate: &str, query: &str) -> f64 {
    distance::jaro::normalized_similarity(candidate.chars(), query.chars())
}

/// Jaro-Winkler similarity (0.0 - 1.0), unrounded
pub fn jaro_winkler(candidate: &str, query: &str) -> f64 {
    distance::jaro_winkler::normalized_similarity(candidate.chars(), query.chars())
}

/// Compute one metric as it appears in ranked output (similarities rounded)
pub fn compute(metric: Metric, candidate: &str, query: &str) -> Score {
    match metric {
        Metric::Hamming => Score::Distance(hamming(candidate, query)),
        Metric::Levenshtein => Score::Distance(levenshtein(candidate, query)),
        Metric::DamerauLevenshtein => Score::Distance(damerau_levenshtein(candidate, query)),
        Metric::Jaro => Score::Similarity(round3(jaro(candidate, query))),
        Metric::JaroWinkler => Score::Similarity(round3(jaro_winkler(candidate, query))),
    }
}
