use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A person whose public profiles are scored against the query keywords.
///
/// Both references are optional. Blank strings are treated the same as a
/// missing reference, which is what an empty form field produces.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Candidate {
    #[serde(default)]
    pub name: Option<String>,
    /// Hosted repository URL, e.g. `https://github.com/owner/repo`.
    #[serde(default, alias = "github")]
    pub repository: Option<String>,
    /// Notes page URL whose headings and paragraphs are scraped.
    #[serde(default, alias = "notion")]
    pub notes: Option<String>,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_repository(mut self, url: impl Into<String>) -> Self {
        self.repository = Some(url.into());
        self
    }

    pub fn with_notes(mut self, url: impl Into<String>) -> Self {
        self.notes = Some(url.into());
        self
    }

    /// Name shown in the output, falling back to `Candidate_<n>` where `n` is
    /// the 1-based input position.
    pub fn display_name(&self, index: usize) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Candidate_{}", index + 1),
        }
    }

    pub fn repository_ref(&self) -> Option<&str> {
        non_blank(self.repository.as_deref())
    }

    pub fn notes_ref(&self) -> Option<&str> {
        non_blank(self.notes.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Error)]
pub enum CandidateFileError {
    #[error("failed to read candidate file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse candidate file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads a JSON array of candidates.
pub fn read_candidates(path: &Path) -> Result<Vec<Candidate>, CandidateFileError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
