use thiserror::Error;

use crate::domain::candidate::Candidate;

pub mod memory;

pub use memory::InMemoryRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("candidate store lock was poisoned")]
    Poisoned,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

pub trait CandidateReader {
    fn list_candidates(&self) -> RepositoryResult<Vec<Candidate>>;
}

pub trait CandidateWriter {
    fn add_candidate(&self, candidate: Candidate) -> RepositoryResult<usize>;
    fn clear_candidates(&self) -> RepositoryResult<usize>;
}
