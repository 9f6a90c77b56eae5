use crate::core::{Metric, Order, RankingReport, ReportKind, Sex};
use crate::dataset::{FileNameSource, NameSource};
use crate::error::Result;
use crate::ranking::{score_multi, score_single, top_n, validate_queries};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Main name ranking orchestrator
pub struct NameEngine {
    source: Arc<dyn NameSource>,
    options: RankingOptions,
}

/// Ranking options/configuration
#[derive(Debug, Clone)]
pub struct RankingOptions {
    /// Which yearly dataset to rank against
    pub birth_year: u32,
    /// Number of names kept in the result
    pub top_n: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            birth_year: 2020,
            top_n: 30,
        }
    }
}

/// What to rank the dataset against
#[derive(Debug, Clone, PartialEq)]
pub enum RankMode {
    /// One query, every metric computed, ranked by `metric`
    Single { query: String, metric: Metric },
    /// Several queries, ranked by mean Jaro-Winkler
    Aggregate { queries: Vec<String> },
}

impl RankMode {
    pub fn single(query: impl Into<String>) -> Self {
        RankMode::Single {
            query: query.into(),
            metric: Metric::JaroWinkler,
        }
    }

    pub fn aggregate<I, S>(queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RankMode::Aggregate {
            queries: queries.into_iter().map(Into::into).collect(),
        }
    }
}

impl NameEngine {
    /// Create new engine over any name source
    pub fn new(source: Arc<dyn NameSource>, options: RankingOptions) -> Self {
        Self { source, options }
    }

    /// Create new engine reading `yob<YEAR>.txt` files from `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>, options: RankingOptions) -> Self {
        Self::new(Arc::new(FileNameSource::new(data_dir)), options)
    }

    pub fn options(&self) -> &RankingOptions {
        &self.options
    }

    /// Load the reference table, score it and keep the top N
    pub fn rank(&self, sex: Sex, mode: RankMode) -> Result<RankingReport> {
        // score_multi validates too; checking here skips loading the dataset
        if let RankMode::Aggregate { queries } = &mode {
            validate_queries(queries.as_slice())?;
        }

        let table = self.source.load(sex, self.options.birth_year)?;
        if table.is_empty() {
            tracing::warn!(
                "Source {} has no {} names for {}",
                self.source.name(),
                sex,
                self.options.birth_year
            );
        }

        let start = Instant::now();

        let (kind, queries, metric, scored) = match mode {
            RankMode::Single { query, metric } => {
                let scored = score_single(&table, &query);
                (ReportKind::Single, vec![query], metric, scored)
            }
            RankMode::Aggregate { queries } => {
                let scored = score_multi(&table, queries.as_slice())?;
                (ReportKind::Aggregate, queries, Metric::JaroWinkler, scored)
            }
        };

        let result = top_n(&scored, metric, self.options.top_n, Order::for_metric(metric));
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        let report = RankingReport {
            kind,
            queries,
            sex,
            birth_year: self.options.birth_year,
            top_n: self.options.top_n,
            candidates: table.len(),
            result,
            latency_ms,
        };

        tracing::info!("Ranked {}", report.display());
        Ok(report)
    }
}
