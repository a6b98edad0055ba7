use serde::Serialize;

/// Relevance of one candidate's profile text to the query.
///
/// `score` is the raw cosine similarity; rounding happens on export.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ScoreResult {
    pub name: String,
    pub score: f64,
    pub repository: Option<String>,
    pub notes: Option<String>,
    /// False when none of the candidate's sources could be fetched.
    pub content_available: bool,
}
