pub mod name_record;
pub mod ranking_report;
pub mod scored_record;

pub use name_record::{NameRecord, ReferenceTable, Sex};
pub use ranking_report::{RankingReport, ReportKind};
pub use scored_record::{Metric, Order, RankedResult, Score, ScoredRecord};
