use crate::types::SearchResult;
use std::cmp::Ordering;

/// Order scored results by descending score and keep the best `k`. Ties fall
/// back to ascending document id so the ranking is deterministic.
pub fn top_k(mut results: Vec<SearchResult>, k: usize) -> Vec<SearchResult> {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    results.truncate(k);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, score: f64) -> SearchResult {
        SearchResult { id: id.to_string(), score, data: None }
    }

    #[test]
    fn keeps_highest_scores_in_order() {
        let scored = vec![
            result("c", 0.2),
            result("a", 0.9),
            result("d", 0.05),
            result("b", 0.5),
        ];
        let top = top_k(scored, 3);
        let ids: Vec<&str> = top.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn ties_break_on_id() {
        let scored = vec![result("z", 0.4), result("m", 0.4), result("a", 0.4)];
        let top = top_k(scored, 2);
        let ids: Vec<&str> = top.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "m"]);
    }

    #[test]
    fn k_larger_than_input_returns_everything() {
        let top = top_k(vec![result("a", 1.0)], 5);
        assert_eq!(top.len(), 1);
    }
}
