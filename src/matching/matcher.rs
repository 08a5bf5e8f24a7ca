use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use crate::core::config::SearchConfig;
use crate::core::token::Doc;
use crate::core::types::{ConfigWarning, MatchError, PatternMatch};
use crate::matching::searcher::FuzzySearcher;
use crate::similarity::{ScoreFn, ScorerRegistry};

/// Hook invoked per match after a whole document has been searched.
///
/// Receives the document, the index of the match the hook fires for, and
/// the complete match list. Hooks run in a separate applier step
/// ([`FuzzyMatcher::apply_callbacks`]) so that `find_matches` itself stays
/// pure data in, pure data out.
pub type OnMatch = Arc<dyn Fn(&Doc, usize, &[PatternMatch]) + Send + Sync>;

/// One registered pattern: the tokenized query, its settings, and the
/// scorer resolved (and validated) at registration time.
struct FuzzyPattern {
    query: Doc,
    config: SearchConfig,
    scorer: ScoreFn,
}

/// Matcher for labeled fuzzy phrase patterns.
///
/// Patterns register under a label with optional per-pattern setting
/// overrides; `find_matches` runs every registered query against a
/// document and concatenates the per-query results. Labels iterate in
/// sorted order and patterns in insertion order, so output is identical
/// across calls for fixed input — no reliance on unordered iteration.
///
/// Registration is the single point of failure: unknown scorer names are
/// rejected there, and configuration out-of-range values are corrected
/// later, at search time, with recorded warnings. Searching never fails.
pub struct FuzzyMatcher {
    defaults: SearchConfig,
    registry: ScorerRegistry,
    patterns: BTreeMap<String, Vec<FuzzyPattern>>,
    callbacks: BTreeMap<String, OnMatch>,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(SearchConfig::default())
    }

    /// Create a matcher whose unset per-pattern settings fall back to
    /// `defaults` instead of the crate defaults.
    #[must_use]
    pub fn with_defaults(defaults: SearchConfig) -> Self {
        Self {
            defaults,
            registry: ScorerRegistry::new(),
            patterns: BTreeMap::new(),
            callbacks: BTreeMap::new(),
        }
    }

    /// Access the scorer registry, e.g. to register custom strategies
    /// before adding patterns that reference them.
    pub fn registry_mut(&mut self) -> &mut ScorerRegistry {
        &mut self.registry
    }

    /// Register patterns under `label`, each optionally paired with a
    /// settings override.
    ///
    /// Fewer overrides than patterns pads the tail with the matcher
    /// defaults; extra overrides are ignored. Both cases are corrected
    /// with a warning (returned and logged), not treated as errors.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownFuzzyFunc`] if any pattern's
    /// `fuzzy_func` names an unregistered custom scorer. Nothing is added
    /// in that case.
    pub fn add(
        &mut self,
        label: impl Into<String>,
        patterns: Vec<Doc>,
        configs: Option<Vec<SearchConfig>>,
    ) -> Result<Vec<ConfigWarning>, MatchError> {
        let label = label.into();
        let mut warnings = Vec::new();

        let mut configs = configs.unwrap_or_default();
        if configs.len() < patterns.len() {
            if !configs.is_empty() {
                let warning = ConfigWarning::MorePatternsThanConfigs {
                    patterns: patterns.len(),
                    configs: configs.len(),
                };
                warn!("{warning}");
                warnings.push(warning);
            }
            configs.resize(patterns.len(), self.defaults.clone());
        } else if configs.len() > patterns.len() {
            let warning = ConfigWarning::MoreConfigsThanPatterns {
                patterns: patterns.len(),
                configs: configs.len(),
            };
            warn!("{warning}");
            warnings.push(warning);
            configs.truncate(patterns.len());
        }

        // Resolve all scorers before mutating so a bad name leaves the
        // matcher untouched.
        let mut resolved = Vec::with_capacity(patterns.len());
        for config in &configs {
            resolved.push(self.registry.resolve(&config.fuzzy_func)?);
        }

        let entry = self.patterns.entry(label).or_default();
        for ((query, config), scorer) in patterns.into_iter().zip(configs).zip(resolved) {
            entry.push(FuzzyPattern {
                query,
                config,
                scorer,
            });
        }
        Ok(warnings)
    }

    /// Register a post-search hook for matches of `label`.
    pub fn set_on_match(&mut self, label: impl Into<String>, callback: OnMatch) {
        self.callbacks.insert(label.into(), callback);
    }

    /// Remove a label and all its patterns.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownLabel`] if the label was never added.
    pub fn remove(&mut self, label: &str) -> Result<(), MatchError> {
        if self.patterns.remove(label).is_none() {
            return Err(MatchError::UnknownLabel(label.to_owned()));
        }
        self.callbacks.remove(label);
        Ok(())
    }

    /// Whether any patterns are registered under `label`
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.patterns.contains_key(label)
    }

    /// All labels, in sorted order
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.patterns.keys().map(String::as_str).collect()
    }

    /// Every registered (label, pattern text) pair with its settings
    #[must_use]
    pub fn patterns(&self) -> Vec<(&str, &str, &SearchConfig)> {
        self.patterns
            .iter()
            .flat_map(|(label, patterns)| {
                patterns
                    .iter()
                    .map(move |p| (label.as_str(), p.query.text.as_str(), &p.config))
            })
            .collect()
    }

    /// Number of labels registered
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Run every registered query against `doc`.
    ///
    /// Per-query results are concatenated with their internal ranking
    /// preserved; nothing is re-sorted across queries, since cross-query
    /// overlap resolution is the downstream ruler's responsibility.
    #[must_use]
    pub fn find_matches(&self, doc: &Doc) -> Vec<PatternMatch> {
        let mut matches = Vec::new();
        for (label, patterns) in &self.patterns {
            for pattern in patterns {
                let searcher = FuzzySearcher::new(Arc::clone(&pattern.scorer));
                for m in searcher.search(doc, &pattern.query, &pattern.config) {
                    matches.push(PatternMatch {
                        label: label.clone(),
                        pattern: pattern.query.text.clone(),
                        start: m.start,
                        end: m.end,
                        ratio: m.ratio,
                    });
                }
            }
        }
        matches
    }

    /// Invoke registered hooks for `matches`, one call per match whose
    /// label has a hook. Hooks may mutate external document state; the
    /// match list itself is immutable here.
    pub fn apply_callbacks(&self, doc: &Doc, matches: &[PatternMatch]) {
        for (index, m) in matches.iter().enumerate() {
            if let Some(callback) = self.callbacks.get(&m.label) {
                callback(doc, index, matches);
            }
        }
    }
}
