use serde::{Deserialize, Serialize};

/// A token window surviving the coarse scan, before boundary optimization.
///
/// Transient: produced by the scanner and consumed by the optimizer within
/// a single query's search pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Start token index (inclusive)
    pub start: usize,

    /// End token index (exclusive)
    pub end: usize,

    /// Coarse match ratio from the scan pass, in [0, 100]
    pub ratio: u32,
}

/// An optimized, accepted match for a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanMatch {
    /// Start token index (inclusive)
    pub start: usize,

    /// End token index (exclusive)
    pub end: usize,

    /// Final match ratio in [0, 100]; always >= the accepting threshold
    pub ratio: u32,
}

impl SpanMatch {
    /// Window length in tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether this match's token range lies entirely within `other`'s
    #[must_use]
    pub fn subsumed_by(&self, other: &SpanMatch) -> bool {
        other.start <= self.start && self.end <= other.end
    }
}

/// A labeled match as emitted by a matcher: the rule label, the raw pattern
/// text that produced it, and the matched token window with its ratio.
///
/// Ownership passes to the caller; downstream overlap resolution across
/// labels is the ruler's job, not the matcher's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    /// Rule label the pattern was registered under
    pub label: String,

    /// Raw text of the pattern that produced this match
    pub pattern: String,

    /// Start token index (inclusive)
    pub start: usize,

    /// End token index (exclusive)
    pub end: usize,

    /// Final match ratio in [0, 100]
    pub ratio: u32,
}

/// Errors raised at pattern-registration time.
///
/// Search itself is total over well-typed input: once registration and
/// configuration checks pass, no runtime failure is expected.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// A `fuzzy_func` name that is neither built in nor registered
    #[error("unknown fuzzy matching function: {0:?}")]
    UnknownFuzzyFunc(String),

    /// A predefined-regex key with no entry in the registry
    #[error("unknown predefined regex pattern: {0:?}")]
    UnknownPredef(String),

    /// The regex engine rejected a pattern string
    #[error("failed to compile regex pattern {pattern:?}: {source}")]
    RegexParse {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// `remove` was called with a label never added
    #[error("label {0:?} does not exist within the matcher rules")]
    UnknownLabel(String),
}

/// Non-fatal configuration corrections, recorded on the resolved settings.
///
/// Each variant names the field that was corrected and the value actually
/// used; processing always continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigWarning {
    /// `flex` exceeded the query length and was clamped down
    FlexAboveQueryLen { requested: i64, used: usize },

    /// `flex` was negative and was clamped to zero
    FlexBelowZero { requested: i64 },

    /// `min_r1` exceeded `min_r2` and was lowered to match
    MinR1AboveMinR2 { min_r1: u32, min_r2: u32 },

    /// `thresh` was below `min_r2` and was raised to match
    ThreshBelowMinR2 { thresh: u32, min_r2: u32 },

    /// More patterns than override configs: extras got the defaults
    MorePatternsThanConfigs { patterns: usize, configs: usize },

    /// More override configs than patterns: extras were ignored
    MoreConfigsThanPatterns { patterns: usize, configs: usize },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FlexAboveQueryLen { requested, used } => write!(
                f,
                "flex of {requested} is greater than the query length; using {used}"
            ),
            Self::FlexBelowZero { requested } => {
                write!(f, "flex of {requested} is below zero; using 0")
            }
            Self::MinR1AboveMinR2 { min_r1, min_r2 } => {
                write!(f, "min_r1 ({min_r1}) > min_r2 ({min_r2}); using min_r2")
            }
            Self::ThreshBelowMinR2 { thresh, min_r2 } => {
                write!(f, "thresh ({thresh}) < min_r2 ({min_r2}); using min_r2")
            }
            Self::MorePatternsThanConfigs { patterns, configs } => write!(
                f,
                "{patterns} patterns but {configs} configs; extra patterns use defaults"
            ),
            Self::MoreConfigsThanPatterns { patterns, configs } => write!(
                f,
                "{configs} configs but {patterns} patterns; extra configs ignored"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsumed_by() {
        let outer = SpanMatch {
            start: 1,
            end: 5,
            ratio: 80,
        };
        let inner = SpanMatch {
            start: 2,
            end: 4,
            ratio: 90,
        };
        let overlapping = SpanMatch {
            start: 3,
            end: 7,
            ratio: 90,
        };
        assert!(inner.subsumed_by(&outer));
        assert!(outer.subsumed_by(&outer));
        assert!(!overlapping.subsumed_by(&outer));
        assert!(!outer.subsumed_by(&inner));
    }
}
