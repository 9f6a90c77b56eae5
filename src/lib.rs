//! # Baby Name Engine
//!
//! Ranks given names by similarity to one or more query names:
//! - Yearly name datasets (`yob<YEAR>.txt`), filtered by sex
//! - Hamming, Levenshtein, Damerau-Levenshtein, Jaro and Jaro-Winkler scoring
//! - Multi-query ranking by mean Jaro-Winkler
//! - Top-N selection and text/JSON reports
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use babyname_engine::{NameEngine, RankMode, RankingOptions, Sex};
//!
//! fn main() -> anyhow::Result<()> {
//!     let engine = NameEngine::with_data_dir("Names", RankingOptions::default());
//!
//!     let report = engine.rank(Sex::Female, RankMode::aggregate(["Ann", "Anna"]))?;
//!
//!     for scored in &report.result.records {
//!         println!("{} - {}", scored.record.name, scored.record.popularity);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod report;

// Re-export primary types
pub use crate::core::{
    Metric, NameRecord, Order, RankedResult, RankingReport, ReferenceTable, ReportKind, Score,
    ScoredRecord, Sex,
};
pub use dataset::{FileNameSource, InMemoryNameSource, NameSource};
pub use engine::{NameEngine, RankMode, RankingOptions};
pub use error::{NameEngineError, Result};
pub use report::OutputFormat;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
