use std::collections::BTreeMap;

use regex::Regex;
use tracing::debug;

use crate::core::config::RegexConfig;
use crate::core::token::Doc;
use crate::core::types::{ConfigWarning, MatchError, PatternMatch};
use crate::regexmatch::searcher::RegexSearcher;

struct RegexPattern {
    source: String,
    regex: Regex,
    config: RegexConfig,
}

/// Multi-pattern regex matcher over labeled pattern groups.
///
/// Patterns compile at registration, so a bad pattern or a bogus
/// predefined key fails `add` and never reaches search time. Labels are
/// kept in sorted order, which keeps [`RegexMatcher::find_matches`]
/// deterministic across runs.
pub struct RegexMatcher {
    defaults: RegexConfig,
    searcher: RegexSearcher,
    patterns: BTreeMap<String, Vec<RegexPattern>>,
}

impl RegexMatcher {
    /// # Errors
    ///
    /// Fails if the predefined pattern registry does not compile.
    pub fn new() -> Result<Self, MatchError> {
        Self::with_defaults(RegexConfig::default())
    }

    /// # Errors
    ///
    /// Fails if the predefined pattern registry does not compile.
    pub fn with_defaults(defaults: RegexConfig) -> Result<Self, MatchError> {
        Ok(Self {
            defaults,
            searcher: RegexSearcher::new()?,
            patterns: BTreeMap::new(),
        })
    }

    /// Register `patterns` under `label`, compiling each eagerly.
    ///
    /// When `configs` is shorter than `patterns` the defaults pad the
    /// tail; extras are dropped. Both cases are reported as warnings.
    ///
    /// # Errors
    ///
    /// Any uncompilable pattern or unknown predefined key fails the
    /// whole call and leaves the matcher unchanged.
    pub fn add(
        &mut self,
        label: &str,
        patterns: Vec<String>,
        configs: Option<Vec<RegexConfig>>,
    ) -> Result<Vec<ConfigWarning>, MatchError> {
        let mut warnings = Vec::new();
        let mut configs = configs.unwrap_or_default();
        if configs.len() < patterns.len() {
            if !configs.is_empty() {
                warnings.push(ConfigWarning::MorePatternsThanConfigs {
                    patterns: patterns.len(),
                    configs: configs.len(),
                });
            }
            configs.resize(patterns.len(), self.defaults);
        } else if configs.len() > patterns.len() {
            warnings.push(ConfigWarning::MoreConfigsThanPatterns {
                patterns: patterns.len(),
                configs: configs.len(),
            });
            configs.truncate(patterns.len());
        }
        for warning in &warnings {
            tracing::warn!(label, "{warning}");
        }

        let mut compiled = Vec::with_capacity(patterns.len());
        for (source, config) in patterns.into_iter().zip(configs) {
            let regex = self.searcher.parse_regex(&source, config.predef)?;
            compiled.push(RegexPattern {
                source,
                regex,
                config,
            });
        }
        self.patterns.entry(label.to_owned()).or_default().extend(compiled);
        Ok(warnings)
    }

    /// Remove all patterns under `label`.
    ///
    /// # Errors
    ///
    /// [`MatchError::UnknownLabel`] when `label` was never added.
    pub fn remove(&mut self, label: &str) -> Result<(), MatchError> {
        self.patterns
            .remove(label)
            .map(|_| ())
            .ok_or_else(|| MatchError::UnknownLabel(label.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.patterns.contains_key(label)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.patterns.keys().map(String::as_str).collect()
    }

    /// Registered pattern sources for `label`, in insertion order.
    #[must_use]
    pub fn patterns(&self, label: &str) -> Vec<&str> {
        self.patterns
            .get(label)
            .map(|group| group.iter().map(|p| p.source.as_str()).collect())
            .unwrap_or_default()
    }

    /// Number of registered labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Run every registered pattern over `doc`.
    ///
    /// Output is grouped by label in sorted order; within a label,
    /// spans follow the ranked span order per pattern.
    #[must_use]
    pub fn find_matches(&self, doc: &Doc) -> Vec<PatternMatch> {
        let mut found = Vec::new();
        for (label, group) in &self.patterns {
            for pattern in group {
                let spans = self.searcher.find_compiled(doc, &pattern.regex, &pattern.config);
                debug!(label, pattern = %pattern.source, spans = spans.len(), "regex pattern done");
                for span in spans {
                    found.push(PatternMatch {
                        label: label.clone(),
                        pattern: pattern.source.clone(),
                        start: span.start,
                        end: span.end,
                        ratio: span.ratio,
                    });
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::whitespace_tokenize;

    #[test]
    fn test_add_and_find() {
        let mut matcher = RegexMatcher::new().unwrap();
        matcher
            .add("ZIP", vec![r"\b\d{5}(?:[-\s]\d{4})?\b".to_owned()], None)
            .unwrap();
        let doc = whitespace_tokenize("Send mail to 02134 or 90210-1234 please");
        let matches = matcher.find_matches(&doc);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.label == "ZIP"));
    }

    #[test]
    fn test_predef_pattern_by_key() {
        let mut matcher = RegexMatcher::new().unwrap();
        let config = RegexConfig {
            predef: true,
            ..RegexConfig::default()
        };
        matcher
            .add("EMAIL", vec!["emails".to_owned()], Some(vec![config]))
            .unwrap();
        let doc = whitespace_tokenize("reach me at someone@example.org thanks");
        let matches = matcher.find_matches(&doc);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].pattern, "emails");
    }

    #[test]
    fn test_bad_pattern_leaves_matcher_unchanged() {
        let mut matcher = RegexMatcher::new().unwrap();
        let err = matcher.add("BAD", vec!["([unclosed".to_owned()], None);
        assert!(matches!(err, Err(MatchError::RegexParse { .. })));
        assert!(!matcher.contains("BAD"));
    }

    #[test]
    fn test_unknown_predef_key_is_fatal() {
        let mut matcher = RegexMatcher::new().unwrap();
        let config = RegexConfig {
            predef: true,
            ..RegexConfig::default()
        };
        let err = matcher.add("X", vec!["nope".to_owned()], Some(vec![config]));
        assert!(matches!(err, Err(MatchError::UnknownPredef(_))));
    }

    #[test]
    fn test_config_padding_warns() {
        let mut matcher = RegexMatcher::new().unwrap();
        let warnings = matcher
            .add(
                "NUM",
                vec![r"\d+".to_owned(), r"\d{2}".to_owned()],
                Some(vec![RegexConfig::default()]),
            )
            .unwrap();
        assert_eq!(
            warnings,
            vec![ConfigWarning::MorePatternsThanConfigs {
                patterns: 2,
                configs: 1
            }]
        );
    }

    #[test]
    fn test_remove_unknown_label() {
        let mut matcher = RegexMatcher::new().unwrap();
        assert!(matches!(
            matcher.remove("GHOST"),
            Err(MatchError::UnknownLabel(_))
        ));
    }
}
