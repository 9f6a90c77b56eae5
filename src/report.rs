//! Rendering and writing ranked results.
//!
//! One artifact is written per run: a plain-text table (optionally preceded
//! by the query list) or a JSON document.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Metric, RankingReport, ReportKind, Sex};
use crate::error::Result;

/// Output artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// `<queries>_Top-<N>_<SEX>_<YEAR>_<Metric>.<ext>`
pub fn output_file_name(report: &RankingReport, format: OutputFormat) -> String {
    format!(
        "{}_Top-{}_{}_{}_{}.{}",
        report.query_label(),
        report.top_n,
        report.sex,
        report.birth_year,
        report.metric(),
        format.extension()
    )
}

/// Right-aligned `Name Popularity <metric>` table
pub fn render_table(report: &RankingReport) -> String {
    let metric = report.metric();
    let header = [
        "Name".to_string(),
        "Popularity".to_string(),
        metric.display_name().to_string(),
    ];

    let rows: Vec<[String; 3]> = report
        .result
        .records
        .iter()
        .map(|r| {
            [
                r.record.name.clone(),
                r.record.popularity.to_string(),
                r.score(metric).map(|s| s.to_string()).unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = header.clone().map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in std::iter::once(&header).chain(&rows) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:>width$}", cell, width = width))
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Full text artifact; multi-query runs start with the query list
pub fn render_text(report: &RankingReport) -> String {
    let table = render_table(report);
    match report.kind {
        ReportKind::Single => table,
        ReportKind::Aggregate => format!("Starting Names: [{}] \n\n{}", report.quoted_queries(), table),
    }
}

fn no_scores(scores: &&[f64]) -> bool {
    scores.is_empty()
}

#[derive(Serialize)]
struct JsonRow<'a> {
    name: &'a str,
    popularity: u64,
    score: f64,
    #[serde(skip_serializing_if = "no_scores")]
    query_scores: &'a [f64],
}

#[derive(Serialize)]
struct JsonReport<'a> {
    queries: &'a [String],
    sex: Sex,
    birth_year: u32,
    top_n: usize,
    metric: Metric,
    results: Vec<JsonRow<'a>>,
}

/// Pretty JSON artifact
pub fn render_json(report: &RankingReport) -> Result<String> {
    let metric = report.metric();
    let results = report
        .result
        .records
        .iter()
        .map(|r| JsonRow {
            name: &r.record.name,
            popularity: r.record.popularity,
            score: r.score(metric).map(|s| s.as_f64()).unwrap_or_default(),
            query_scores: &r.query_scores,
        })
        .collect();

    let doc = JsonReport {
        queries: &report.queries,
        sex: report.sex,
        birth_year: report.birth_year,
        top_n: report.top_n,
        metric,
        results,
    };

    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Write the artifact into `output_dir`, returning its path
pub fn write_report(report: &RankingReport, output_dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    let content = match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report)?,
    };

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(output_file_name(report, format));
    fs::write(&path, content)?;

    tracing::info!("Wrote {} rows to {}", report.result.len(), path.display());
    Ok(path)
}
