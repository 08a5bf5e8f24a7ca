use tracing::debug;

use crate::core::config::{ResolvedConfig, SearchConfig};
use crate::core::token::Doc;
use crate::core::types::SpanMatch;
use crate::matching::{optimize, rank, scan};
use crate::similarity::ScoreFn;

/// Runs the scan → optimize → rank pipeline for a single query.
///
/// The searcher owns its resolved scoring function; queries and documents
/// pass through as read-only references, so one searcher can serve any
/// number of sequential searches (and documents can be shared across
/// concurrently running searchers).
pub struct FuzzySearcher {
    scorer: ScoreFn,
}

impl FuzzySearcher {
    #[must_use]
    pub fn new(scorer: ScoreFn) -> Self {
        Self { scorer }
    }

    /// Score two strings with this searcher's strategy, lowercasing both
    /// sides first when `ignore_case` is set.
    #[must_use]
    pub fn compare(&self, s1: &str, s2: &str, ignore_case: bool) -> u32 {
        if ignore_case {
            (self.scorer)(&s1.to_lowercase(), &s2.to_lowercase())
        } else {
            (self.scorer)(s1, s2)
        }
    }

    /// Find all windows of `doc` matching `query` under `config`.
    ///
    /// Resolves the configuration against the query length (clamping with
    /// recorded warnings as needed), then runs the three pipeline stages.
    /// Empty documents and empty queries yield an empty result, never an
    /// error. Output is deterministic for fixed inputs.
    #[must_use]
    pub fn search(&self, doc: &Doc, query: &Doc, config: &SearchConfig) -> Vec<SpanMatch> {
        if doc.is_empty() || query.is_empty() {
            return Vec::new();
        }
        let resolved = config.resolve(query.len());
        self.search_resolved(doc, query, &resolved)
    }

    /// [`search`](Self::search) with a pre-resolved configuration, for
    /// callers that resolve once and reuse (or need the recorded
    /// warnings).
    #[must_use]
    pub fn search_resolved(&self, doc: &Doc, query: &Doc, config: &ResolvedConfig) -> Vec<SpanMatch> {
        if doc.is_empty() || query.is_empty() {
            return Vec::new();
        }

        let query_text = if config.ignore_case {
            query.text.to_lowercase()
        } else {
            query.text.clone()
        };
        let compare = |start: usize, end: usize| {
            let window = doc.window_text(start, end);
            if config.ignore_case {
                (self.scorer)(&query_text, &window.to_lowercase())
            } else {
                (self.scorer)(&query_text, window)
            }
        };

        let candidates = scan::scan(doc, query.len(), config.min_r1, &compare);
        debug!(
            query = %query.text,
            candidates = candidates.len(),
            "coarse scan complete"
        );

        let matches: Vec<SpanMatch> = candidates
            .into_iter()
            .filter_map(|candidate| optimize::optimize(doc, candidate, config, &compare))
            .collect();

        rank::rank(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::{FuzzyFunc, ScorerRegistry};
    use crate::tokenize::whitespace_tokenize;

    fn searcher() -> FuzzySearcher {
        let registry = ScorerRegistry::new();
        FuzzySearcher::new(registry.resolve(&FuzzyFunc::Simple).unwrap())
    }

    #[test]
    fn test_exact_phrase_scores_100() {
        let doc = whitespace_tokenize("Ridley Scott was the director of Alien");
        let query = whitespace_tokenize("Ridley Scott");
        let matches = searcher().search(&doc, &query, &SearchConfig::default());
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].start, matches[0].end, matches[0].ratio), (0, 2, 100));
    }

    #[test]
    fn test_misspelled_phrase_still_matches() {
        let doc = whitespace_tokenize("The phrase Ridley Scot appears here");
        let query = whitespace_tokenize("Ridley Scott");
        let matches = searcher().search(&doc, &query, &SearchConfig::default());
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].start, matches[0].end), (2, 4));
        assert!(matches[0].ratio >= 90);
    }

    #[test]
    fn test_empty_doc_and_empty_query() {
        let s = searcher();
        let doc = whitespace_tokenize("some text");
        let empty = whitespace_tokenize("");
        assert!(s.search(&empty, &doc, &SearchConfig::default()).is_empty());
        assert!(s.search(&doc, &empty, &SearchConfig::default()).is_empty());
    }

    #[test]
    fn test_case_sensitivity_never_raises_ratio() {
        let s = searcher();
        let doc = whitespace_tokenize("RIDLEY SCOTT");
        let query = whitespace_tokenize("ridley scott");
        let insensitive = SearchConfig::default();
        let sensitive = SearchConfig {
            ignore_case: false,
            ..SearchConfig::default()
        };
        let with_fold = s.search(&doc, &query, &insensitive);
        let without_fold = s.search(&doc, &query, &sensitive);
        let folded_ratio = with_fold.first().map_or(0, |m| m.ratio);
        let unfolded_ratio = without_fold.first().map_or(0, |m| m.ratio);
        assert_eq!(folded_ratio, 100);
        assert!(unfolded_ratio <= folded_ratio);
    }

    #[test]
    fn test_search_is_idempotent() {
        let s = searcher();
        let doc = whitespace_tokenize("flexible fuzzy matching finds fuzzy matches in fuzzy text");
        let query = whitespace_tokenize("fuzzy matching");
        let config = SearchConfig {
            min_r: 60,
            ..SearchConfig::default()
        };
        let first = s.search(&doc, &query, &config);
        let second = s.search(&doc, &query, &config);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
