use crate::domain::score::ScoreResult;

/// Sorts by descending score. The sort is stable, so equal scores keep their
/// input order.
pub fn rank(mut results: Vec<ScoreResult>) -> Vec<ScoreResult> {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, score: f64) -> ScoreResult {
        ScoreResult {
            name: name.into(),
            score,
            repository: None,
            notes: None,
            content_available: true,
        }
    }

    #[test]
    fn highest_score_first() {
        let ranked = rank(vec![result("a", 0.1), result("b", 0.9), result("c", 0.5)]);
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank(vec![
            result("first", 0.5),
            result("top", 0.7),
            result("second", 0.5),
            result("zero", 0.0),
            result("third", 0.5),
        ]);
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["top", "first", "second", "third", "zero"]);
    }

    #[test]
    fn empty_input() {
        assert!(rank(Vec::new()).is_empty());
    }
}
