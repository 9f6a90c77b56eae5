use serde::{Deserialize, Serialize};

use crate::core::{Metric, RankedResult, Sex};

/// How the candidates were scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// One query, ranked by any metric
    Single,
    /// Several queries, ranked by mean Jaro-Winkler
    Aggregate,
}

/// Ranked output of one engine run, ready to be rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub kind: ReportKind,

    /// Query names, in the order given
    pub queries: Vec<String>,

    pub sex: Sex,
    pub birth_year: u32,

    /// Requested N (the result may hold fewer)
    pub top_n: usize,

    /// Number of candidates scored
    pub candidates: usize,

    pub result: RankedResult,

    /// Scoring + ranking time in milliseconds
    pub latency_ms: f64,
}

impl RankingReport {
    pub fn metric(&self) -> Metric {
        self.result.metric
    }

    /// Query part of the output file name: `Ann` or `['Ann', 'Anna']`
    pub fn query_label(&self) -> String {
        match self.kind {
            ReportKind::Single => self.queries.join("_"),
            ReportKind::Aggregate => format!("[{}]", self.quoted_queries()),
        }
    }

    /// `'Ann', 'Anna'`
    pub fn quoted_queries(&self) -> String {
        self.queries
            .iter()
            .map(|q| format!("'{}'", q))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!(
            "{} {} {} top-{} by {}: {} of {} candidates ({:.2}ms)",
            self.query_label(),
            self.sex,
            self.birth_year,
            self.top_n,
            self.metric(),
            self.result.len(),
            self.candidates,
            self.latency_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Order;

    fn report(kind: ReportKind, queries: &[&str]) -> RankingReport {
        RankingReport {
            kind,
            queries: queries.iter().map(|q| q.to_string()).collect(),
            sex: Sex::Female,
            birth_year: 2020,
            top_n: 30,
            candidates: 0,
            result: RankedResult {
                metric: Metric::JaroWinkler,
                order: Order::Largest,
                records: Vec::new(),
            },
            latency_ms: 0.5,
        }
    }

    #[test]
    fn test_query_label() {
        assert_eq!(report(ReportKind::Single, &["Ann"]).query_label(), "Ann");
        assert_eq!(
            report(ReportKind::Aggregate, &["Ann", "Anna"]).query_label(),
            "['Ann', 'Anna']"
        );
    }

    #[test]
    fn test_display() {
        let shown = report(ReportKind::Single, &["Ann"]).display();
        assert!(shown.starts_with("Ann F 2020 top-30 by Jaro-Winkler"));
    }
}
