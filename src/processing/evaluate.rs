use std::sync::Arc;

use futures::future;
use thiserror::Error;
use tokio::sync::Semaphore;
use url::Url;

use crate::domain::candidate::Candidate;
use crate::domain::score::ScoreResult;
use crate::fetchers::notes::NotesPageFetcher;
use crate::fetchers::readme::ReadmeFetcher;
use crate::fetchers::{DocumentFetcher, FetchError, FetchResult, build_reqwest_client};
use crate::models::config::Settings;
use crate::processing::corpus::{AssembledDocument, FetchedText, assemble_corpus};
use crate::processing::ranking::rank;
use crate::processing::scoring::{ScoringError, TfidfScorer};
use crate::repository::{CandidateReader, RepositoryError};

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Fetches, assembles, scores and ranks a batch of candidates.
///
/// Candidates are fetched concurrently, with at most `concurrency` candidates
/// in flight. Each candidate's two sources are fetched one after another.
pub struct CandidateEvaluator {
    readme: Box<dyn DocumentFetcher>,
    notes: Box<dyn DocumentFetcher>,
    scorer: TfidfScorer,
    semaphore: Arc<Semaphore>,
}

impl CandidateEvaluator {
    pub fn new(
        readme: Box<dyn DocumentFetcher>,
        notes: Box<dyn DocumentFetcher>,
        scorer: TfidfScorer,
        concurrency: usize,
    ) -> Self {
        Self {
            readme,
            notes,
            scorer,
            semaphore: Arc::new(Semaphore::new(concurrency.max(1))),
        }
    }

    /// Builds the HTTP-backed fetchers described by `settings`.
    pub fn from_settings(settings: &Settings) -> FetchResult<Self> {
        let client = build_reqwest_client(settings.request_timeout())?;
        let api_base = Url::parse(&settings.api_base_url)
            .map_err(|e| FetchError::Build(format!("invalid API base URL: {e}")))?;

        Ok(Self::new(
            Box::new(ReadmeFetcher::new(
                client.clone(),
                api_base,
                settings.repository_host.clone(),
                settings.github_token.clone(),
            )),
            Box::new(NotesPageFetcher::new(client)),
            TfidfScorer::new(),
            settings.fetch_concurrency,
        ))
    }

    async fn fetch_candidate(&self, candidate: &Candidate) -> Vec<FetchedText> {
        let mut fetched = Vec::with_capacity(2);
        let Ok(_permit) = self.semaphore.acquire().await else {
            return fetched;
        };

        for (fetcher, reference) in [
            (&self.readme, candidate.repository_ref()),
            (&self.notes, candidate.notes_ref()),
        ] {
            if let Some(reference) = reference {
                fetched.push(FetchedText {
                    kind: fetcher.kind(),
                    reference: reference.to_string(),
                    result: fetcher.fetch_text(reference).await,
                });
            }
        }
        fetched
    }

    /// Fetches every candidate's sources and assembles one document per
    /// candidate. `documents[i]` always belongs to `candidates[i]`.
    pub async fn fetch_corpus(&self, candidates: &[Candidate]) -> Vec<AssembledDocument> {
        let tasks = candidates.iter().map(|c| self.fetch_candidate(c));
        let fetches = future::join_all(tasks).await;
        assemble_corpus(fetches)
    }

    /// Scores `candidates` against `keywords` and returns them ranked.
    ///
    /// The query is validated before any request is made.
    pub async fn evaluate(
        &self,
        candidates: &[Candidate],
        keywords: &str,
    ) -> Result<Vec<ScoreResult>, ScoringError> {
        if keywords.trim().is_empty() {
            return Err(ScoringError::InvalidQuery);
        }
        log::info!("Evaluating {} candidates", candidates.len());

        let corpus = self.fetch_corpus(candidates).await;
        let texts: Vec<&str> = corpus.iter().map(|d| d.text.as_str()).collect();
        let scores = self.scorer.score(&texts, keywords)?;

        let results = candidates
            .iter()
            .zip(corpus.iter().zip(scores))
            .enumerate()
            .map(|(index, (candidate, (document, score)))| ScoreResult {
                name: candidate.display_name(index),
                score,
                repository: candidate.repository.clone(),
                notes: candidate.notes.clone(),
                content_available: document.content_available,
            })
            .collect();

        let ranked = rank(results);
        log::info!("Finished evaluating {} candidates", ranked.len());
        Ok(ranked)
    }
}

/// Scores the candidates currently held by `repo`.
pub async fn evaluate_store<R>(
    repo: &R,
    evaluator: &CandidateEvaluator,
    keywords: &str,
) -> Result<Vec<ScoreResult>, EvaluationError>
where
    R: CandidateReader,
{
    let candidates = repo.list_candidates()?;
    Ok(evaluator.evaluate(&candidates, keywords).await?)
}
