use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::core::config::RegexConfig;
use crate::core::token::Doc;
use crate::core::types::{MatchError, SpanMatch};
use crate::matching::rank;
use crate::regexmatch::predef::default_predefs;
use crate::regexmatch::weights::{normalize_counts, FuzzyCounts};

/// One character-level hit from the regex engine, in character offsets
/// into the document text, with any edit counts the engine reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegexHit {
    pub start_char: usize,
    pub end_char: usize,
    pub counts: FuzzyCounts,
}

/// Character-level regex matching mapped back onto token spans.
///
/// Matching runs over the raw document text; each hit is then aligned to
/// the token sequence. Hits that land exactly on token boundaries map
/// directly; with `partial` enabled, hits that begin or end mid-token are
/// expanded outward to the nearest enclosing token boundaries, otherwise
/// they are dropped. Scores come from the engine's reported edit counts
/// under the configured weighting scheme.
pub struct RegexSearcher {
    predefs: HashMap<String, Regex>,
}

impl RegexSearcher {
    /// Create a searcher with the default predefined pattern registry.
    ///
    /// # Errors
    ///
    /// Propagates compilation failure from the predefined set.
    pub fn new() -> Result<Self, MatchError> {
        Ok(Self {
            predefs: default_predefs()?,
        })
    }

    /// Create a searcher with a custom predefined-pattern registry.
    #[must_use]
    pub fn with_predefs(predefs: HashMap<String, Regex>) -> Self {
        Self { predefs }
    }

    /// Registered predefined pattern keys, sorted.
    #[must_use]
    pub fn predef_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.predefs.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Compile `query` to a regex, or look it up in the predefined
    /// registry when `predef` is set.
    ///
    /// # Errors
    ///
    /// [`MatchError::UnknownPredef`] for a missing registry key;
    /// [`MatchError::RegexParse`] for an uncompilable pattern. Both are
    /// caller programming mistakes and fail eagerly rather than
    /// defaulting.
    pub fn parse_regex(&self, query: &str, predef: bool) -> Result<Regex, MatchError> {
        if predef {
            return self
                .predefs
                .get(query)
                .cloned()
                .ok_or_else(|| MatchError::UnknownPredef(query.to_owned()));
        }
        Regex::new(query).map_err(|source| MatchError::RegexParse {
            pattern: query.to_owned(),
            source: Box::new(source),
        })
    }

    /// Find all matches of `query` in `doc` as token spans.
    ///
    /// # Errors
    ///
    /// Fails only on pattern compilation / registry lookup; the search
    /// itself is total.
    pub fn find_spans(
        &self,
        doc: &Doc,
        query: &str,
        config: &RegexConfig,
    ) -> Result<Vec<SpanMatch>, MatchError> {
        let regex = self.parse_regex(query, config.predef)?;
        Ok(self.find_compiled(doc, &regex, config))
    }

    /// Find all matches of an already-compiled pattern as token spans.
    #[must_use]
    pub fn find_compiled(&self, doc: &Doc, regex: &Regex, config: &RegexConfig) -> Vec<SpanMatch> {
        let hits = exact_hits(regex, &doc.text);
        debug!(pattern = regex.as_str(), hits = hits.len(), "regex pass complete");

        let chars_to_tokens = doc.char_to_token_map();
        let mut matches = Vec::new();
        for hit in hits {
            let span = doc.char_span(hit.start_char, hit.end_char).or_else(|| {
                if !config.partial || hit.end_char == hit.start_char {
                    return None;
                }
                // Expand a mid-token hit to the tokens containing its
                // first and last characters.
                let start_token = chars_to_tokens.get(&hit.start_char)?;
                let end_token = chars_to_tokens.get(&(hit.end_char - 1))?;
                Some((*start_token, *end_token + 1))
            });
            let Some((start, end)) = span else {
                continue;
            };

            let match_len = doc.window_text(start, end).chars().count();
            let ratio = normalize_counts(match_len, hit.counts, config.fuzzy_weights);
            if ratio >= config.min_r {
                matches.push(SpanMatch { start, end, ratio });
            }
        }

        rank::rank(matches)
    }
}

/// Run an exact regex over `text`, reporting hits in character offsets
/// with zero edit counts.
///
/// This is the bundled engine behind the fuzzy-count seam: an
/// approximate engine would populate `counts` instead.
fn exact_hits(regex: &Regex, text: &str) -> Vec<RegexHit> {
    let mut hits = Vec::new();
    for m in regex.find_iter(text) {
        let start_char = text[..m.start()].chars().count();
        let end_char = start_char + m.as_str().chars().count();
        hits.push(RegexHit {
            start_char,
            end_char,
            counts: FuzzyCounts::default(),
        });
    }
    hits
}
