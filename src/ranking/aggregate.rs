use std::collections::HashSet;

use crate::core::{Metric, ReferenceTable, Score, ScoredRecord};
use crate::error::{NameEngineError, Result};
use crate::ranking::metrics;

/// Reject empty query lists and repeated query names
pub fn validate_queries<S: AsRef<str>>(queries: &[S]) -> Result<()> {
    if queries.is_empty() {
        return Err(NameEngineError::EmptyQuery);
    }

    let mut seen = HashSet::with_capacity(queries.len());
    for query in queries {
        if !seen.insert(query.as_ref()) {
            return Err(NameEngineError::DuplicateQuery(query.as_ref().to_string()));
        }
    }

    Ok(())
}

/// Mean of the per-query scores, rounded to 3 decimals with ties to even
pub fn mean_score(query_scores: &[f64]) -> f64 {
    let mean = query_scores.iter().sum::<f64>() / query_scores.len() as f64;
    metrics::round3_half_even(mean)
}

/// Score every candidate against several queries with Jaro-Winkler.
///
/// Each candidate gets one rounded score per query (in `query_scores`, in
/// query order) and an aggregate `Jaro-Winkler` score: the mean of those,
/// rounded after averaging.
pub fn score_multi<S: AsRef<str>>(table: &ReferenceTable, queries: &[S]) -> Result<Vec<ScoredRecord>> {
    validate_queries(queries)?;

    let scored: Vec<ScoredRecord> = table
        .iter()
        .map(|record| {
            let query_scores: Vec<f64> = queries
                .iter()
                .map(|q| metrics::round3(metrics::jaro_winkler(&record.name, q.as_ref())))
                .collect();

            let mut scored = ScoredRecord::new(record.clone())
                .with_score(Metric::JaroWinkler, Score::Similarity(mean_score(&query_scores)));
            scored.query_scores = query_scores;
            scored
        })
        .collect();

    tracing::debug!(
        "Scored {} candidates against {} queries",
        scored.len(),
        queries.len()
    );
    Ok(scored)
}
