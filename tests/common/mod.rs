//! Helpers for integration tests.
#![allow(dead_code)]

use std::time::Duration;

use url::Url;
use vibe_filter::fetchers::build_reqwest_client;
use vibe_filter::fetchers::notes::NotesPageFetcher;
use vibe_filter::fetchers::readme::ReadmeFetcher;
use vibe_filter::processing::evaluate::CandidateEvaluator;
use vibe_filter::processing::scoring::TfidfScorer;
use wiremock::MockServer;

pub const REPOSITORY_HOST: &str = "github.com";

pub fn client() -> reqwest::Client {
    build_reqwest_client(Duration::from_secs(5)).expect("Failed to build HTTP client.")
}

/// Readme fetcher whose API calls go to `server`.
pub fn readme_fetcher(server: &MockServer, token: Option<&str>) -> ReadmeFetcher {
    let api_base = Url::parse(&server.uri()).expect("Mock server URI is a valid URL.");
    ReadmeFetcher::new(client(), api_base, REPOSITORY_HOST, token.map(str::to_string))
}

pub fn evaluator(server: &MockServer) -> CandidateEvaluator {
    CandidateEvaluator::new(
        Box::new(readme_fetcher(server, None)),
        Box::new(NotesPageFetcher::new(client())),
        TfidfScorer::new(),
        4,
    )
}

/// Notes page URL served by `server`.
pub fn notes_url(server: &MockServer, path: &str) -> String {
    format!("{}{path}", server.uri())
}

pub fn repository_url(owner: &str, repo: &str) -> String {
    format!("https://{REPOSITORY_HOST}/{owner}/{repo}")
}
