use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod notes;
pub mod readme;

/// Timeout applied to every outbound request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a reference produced no text.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("malformed reference: {0}")]
    MalformedReference(String),
    #[error("{url} responded with {status}")]
    RemoteUnavailable {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("failed to build fetcher: {0}")]
    Build(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Which profile source a piece of text came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Readme,
    NotesPage,
}

/// A single-attempt retriever of text behind a URL-like reference.
///
/// Implementations make at most one request per call and never retry.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Fetches the text behind `reference`.
    async fn fetch_text(&self, reference: &str) -> FetchResult<String>;
}

/// Builds the HTTP client shared by all fetchers.
pub fn build_reqwest_client(timeout: Duration) -> FetchResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| FetchError::Build(e.to_string()))
}
