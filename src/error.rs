use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the name engine
#[derive(Error, Debug)]
pub enum NameEngineError {
    /// No dataset exists for the requested birth year
    #[error("No name dataset for birth year {birth_year} (expected {})", .path.display())]
    NotFound { birth_year: u32, path: PathBuf },

    /// A dataset row did not parse into name, sex, count
    #[error("Malformed dataset row at line {line}: {message}")]
    Format { line: u64, message: String },

    /// Sex other than F or M
    #[error("Invalid sex '{0}' (expected F or M)")]
    InvalidSex(String),

    /// Metric name not recognised
    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),

    /// Multi-query run without any query
    #[error("At least one query name is required")]
    EmptyQuery,

    /// The same query name given twice in one multi-query run
    #[error("Duplicate query name: {0}")]
    DuplicateQuery(String),

    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, NameEngineError>;
