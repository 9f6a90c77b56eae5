use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::core::NameRecord;
use crate::error::NameEngineError;

/// String metrics computed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "Hamming")]
    Hamming,
    #[serde(rename = "Levenshtein")]
    Levenshtein,
    #[serde(rename = "Damerau-Levenshtein")]
    DamerauLevenshtein,
    #[serde(rename = "Jaro")]
    Jaro,
    #[serde(rename = "Jaro-Winkler")]
    JaroWinkler,
}

impl Metric {
    /// All metrics, in the column order of single-query output
    pub const ALL: [Metric; 5] = [
        Metric::Hamming,
        Metric::Levenshtein,
        Metric::DamerauLevenshtein,
        Metric::Jaro,
        Metric::JaroWinkler,
    ];

    /// Column header and file-name suffix
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Hamming => "Hamming",
            Metric::Levenshtein => "Levenshtein",
            Metric::DamerauLevenshtein => "Damerau-Levenshtein",
            Metric::Jaro => "Jaro",
            Metric::JaroWinkler => "Jaro-Winkler",
        }
    }

    /// True for [0,1] similarities where larger is closer
    pub fn is_similarity(&self) -> bool {
        matches!(self, Metric::Jaro | Metric::JaroWinkler)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Metric {
    type Err = NameEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "hamming" => Ok(Metric::Hamming),
            "levenshtein" => Ok(Metric::Levenshtein),
            "dameraulevenshtein" | "damerau" => Ok(Metric::DamerauLevenshtein),
            "jaro" => Ok(Metric::Jaro),
            "jarowinkler" => Ok(Metric::JaroWinkler),
            _ => Err(NameEngineError::UnknownMetric(s.to_string())),
        }
    }
}

/// A single metric value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    /// Edit count (Hamming, Levenshtein, Damerau-Levenshtein)
    Distance(usize),
    /// Similarity in [0,1], already rounded to 3 decimals
    Similarity(f64),
}

impl Score {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Score::Distance(d) => d as f64,
            Score::Similarity(s) => s,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Distance(d) => write!(f, "{}", d),
            Score::Similarity(s) => write!(f, "{:.3}", s),
        }
    }
}

/// A candidate record with its scores against the query (or queries)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub record: NameRecord,

    /// One value per computed metric
    pub scores: BTreeMap<Metric, Score>,

    /// Multi-query only: Jaro-Winkler against each query, aligned with the
    /// query list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_scores: Vec<f64>,
}

impl ScoredRecord {
    pub fn new(record: NameRecord) -> Self {
        Self {
            record,
            scores: BTreeMap::new(),
            query_scores: Vec::new(),
        }
    }

    pub fn with_score(mut self, metric: Metric, score: Score) -> Self {
        self.scores.insert(metric, score);
        self
    }

    pub fn score(&self, metric: Metric) -> Option<Score> {
        self.scores.get(&metric).copied()
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }
}

/// Selection direction for `top_n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Largest,
    Smallest,
}

impl Order {
    /// Largest for similarities, smallest for distances
    pub fn for_metric(metric: Metric) -> Self {
        if metric.is_similarity() {
            Order::Largest
        } else {
            Order::Smallest
        }
    }
}

/// Top-N records by one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub metric: Metric,
    pub order: Order,
    pub records: Vec<ScoredRecord>,
}

impl RankedResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sex;

    #[test]
    fn test_metric_parsing() {
        assert_eq!("Jaro-Winkler".parse::<Metric>().unwrap(), Metric::JaroWinkler);
        assert_eq!("jaro_winkler".parse::<Metric>().unwrap(), Metric::JaroWinkler);
        assert_eq!("damerau".parse::<Metric>().unwrap(), Metric::DamerauLevenshtein);
        assert_eq!("HAMMING".parse::<Metric>().unwrap(), Metric::Hamming);
        assert!("soundex".parse::<Metric>().is_err());
    }

    #[test]
    fn test_order_follows_metric_semantics() {
        assert_eq!(Order::for_metric(Metric::Jaro), Order::Largest);
        assert_eq!(Order::for_metric(Metric::JaroWinkler), Order::Largest);
        assert_eq!(Order::for_metric(Metric::Hamming), Order::Smallest);
        assert_eq!(Order::for_metric(Metric::Levenshtein), Order::Smallest);
        assert_eq!(Order::for_metric(Metric::DamerauLevenshtein), Order::Smallest);
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score::Distance(3).to_string(), "3");
        assert_eq!(Score::Similarity(0.9).to_string(), "0.900");
        assert_eq!(Score::Similarity(1.0).to_string(), "1.000");
    }

    #[test]
    fn test_serialization() {
        let scored = ScoredRecord::new(NameRecord::new("Ann", Sex::Female, 12))
            .with_score(Metric::JaroWinkler, Score::Similarity(0.95))
            .with_score(Metric::Levenshtein, Score::Distance(1));

        let json = serde_json::to_string(&scored).unwrap();
        assert!(json.contains("\"Jaro-Winkler\":0.95"));
        assert!(json.contains("\"Levenshtein\":1"));
        assert!(!json.contains("query_scores"));
    }
}
