//! CSV and JSON renderings of a ranked result list.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::domain::score::ScoreResult;

const CSV_HEADER: &str = "name,score,repository,notes,content_available";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    score: f64,
    repository: Option<&'a str>,
    notes: Option<&'a str>,
    content_available: bool,
}

impl<'a> ExportRow<'a> {
    fn new(result: &'a ScoreResult, precision: u32) -> Self {
        Self {
            name: &result.name,
            score: round_score(result.score, precision),
            repository: result.repository.as_deref(),
            notes: result.notes.as_deref(),
            content_available: result.content_available,
        }
    }
}

/// Rounds to `precision` decimal places.
pub fn round_score(score: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(15) as i32);
    (score * factor).round() / factor
}

pub fn to_json(results: &[ScoreResult], precision: u32) -> ExportResult<String> {
    let rows: Vec<ExportRow> = results.iter().map(|r| ExportRow::new(r, precision)).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

pub fn to_csv(results: &[ScoreResult], precision: u32) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for result in results {
        let row = ExportRow::new(result, precision);
        let fields = [
            csv_field(row.name),
            row.score.to_string(),
            csv_field(row.repository.unwrap_or_default()),
            csv_field(row.notes.unwrap_or_default()),
            row.content_available.to_string(),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Quotes a field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn write_json(path: &Path, results: &[ScoreResult], precision: u32) -> ExportResult<()> {
    std::fs::write(path, to_json(results, precision)?)?;
    Ok(())
}

pub fn write_csv(path: &Path, results: &[ScoreResult], precision: u32) -> ExportResult<()> {
    std::fs::write(path, to_csv(results, precision))?;
    Ok(())
}
