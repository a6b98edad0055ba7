use std::sync::Mutex;

use crate::domain::candidate::Candidate;
use crate::repository::{CandidateReader, CandidateWriter, RepositoryError, RepositoryResult};

/// Candidate list kept for the lifetime of one session.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    candidates: Mutex<Vec<Candidate>>,
}

impl InMemoryRepository {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates: Mutex::new(candidates),
        }
    }
}

impl CandidateReader for InMemoryRepository {
    fn list_candidates(&self) -> RepositoryResult<Vec<Candidate>> {
        let candidates = self.candidates.lock().map_err(|_| RepositoryError::Poisoned)?;
        Ok(candidates.clone())
    }
}

impl CandidateWriter for InMemoryRepository {
    /// Appends a candidate and returns the new size of the list.
    fn add_candidate(&self, candidate: Candidate) -> RepositoryResult<usize> {
        let mut candidates = self.candidates.lock().map_err(|_| RepositoryError::Poisoned)?;
        candidates.push(candidate);
        Ok(candidates.len())
    }

    /// Removes every candidate and returns how many were removed.
    fn clear_candidates(&self) -> RepositoryResult<usize> {
        let mut candidates = self.candidates.lock().map_err(|_| RepositoryError::Poisoned)?;
        let removed = candidates.len();
        candidates.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_list_clear() {
        let repo = InMemoryRepository::default();
        assert_eq!(repo.add_candidate(Candidate::new("Alice")).unwrap(), 1);
        assert_eq!(repo.add_candidate(Candidate::new("Bob")).unwrap(), 2);

        let names: Vec<_> = repo
            .list_candidates()
            .unwrap()
            .into_iter()
            .filter_map(|c| c.name)
            .collect();
        assert_eq!(names, ["Alice", "Bob"]);

        assert_eq!(repo.clear_candidates().unwrap(), 2);
        assert!(repo.list_candidates().unwrap().is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let repo = InMemoryRepository::new(vec![Candidate::new("Alice")]);
        repo.add_candidate(Candidate::new("Alice")).unwrap();
        assert_eq!(repo.list_candidates().unwrap().len(), 2);
    }
}
