use crate::core::token::Doc;
use crate::core::types::Candidate;

/// Coarse pass: score every window of `query_len` tokens against the query
/// and keep those at or above `min_r1`.
///
/// One scoring call per offset, so the pass is O(N) in document length
/// with the scoring strategy dominating each step. `min_r1 == 0` keeps
/// every window — the caller has asked for exhaustive refinement and
/// accepts the cost. Candidates come back in ascending start order.
pub fn scan(
    doc: &Doc,
    query_len: usize,
    min_r1: u32,
    compare: &dyn Fn(usize, usize) -> u32,
) -> Vec<Candidate> {
    if query_len == 0 || doc.len() < query_len {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for start in 0..=(doc.len() - query_len) {
        let end = start + query_len;
        let ratio = compare(start, end);
        if ratio >= min_r1 {
            candidates.push(Candidate { start, end, ratio });
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::simple_ratio;
    use crate::tokenize::whitespace_tokenize;

    fn scan_with(doc: &Doc, query: &str, min_r1: u32) -> Vec<Candidate> {
        let query_doc = whitespace_tokenize(query);
        let query_text = query_doc.text.to_lowercase();
        let compare =
            |start: usize, end: usize| simple_ratio(&query_text, &doc.window_text(start, end).to_lowercase());
        scan(doc, query_doc.len(), min_r1, &compare)
    }

    #[test]
    fn test_exact_window_found() {
        let doc = whitespace_tokenize("Ridley Scott was the director of Alien");
        let candidates = scan_with(&doc, "Ridley Scott", 50);
        assert_eq!(candidates[0].start, 0);
        assert_eq!(candidates[0].end, 2);
        assert_eq!(candidates[0].ratio, 100);
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let doc = whitespace_tokenize("abcd");
        let query_doc = whitespace_tokenize("abcc");
        let query_text = query_doc.text.clone();
        let compare =
            |start: usize, end: usize| simple_ratio(&query_text, doc.window_text(start, end));
        let at_ratio = compare(0, 1);
        assert_eq!(at_ratio, 75);
        // at the threshold: kept
        assert_eq!(scan(&doc, 1, at_ratio, &compare).len(), 1);
        // one point above: dropped
        assert!(scan(&doc, 1, at_ratio + 1, &compare).is_empty());
    }

    #[test]
    fn test_zero_min_r1_keeps_all_windows() {
        let doc = whitespace_tokenize("one two three four");
        let candidates = scan_with(&doc, "zzz qqq", 0);
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_query_longer_than_doc() {
        let doc = whitespace_tokenize("short");
        assert!(scan_with(&doc, "much longer query here", 0).is_empty());
    }
}
