//! Similarity scoring strategies and their registry.
//!
//! The scorer contract: two strings in, an integer ratio in [0, 100] out;
//! deterministic, pure, and total (empty input scores 0 rather than
//! erroring). Built-in strategies are the closed [`FuzzyFunc`] enum;
//! user-defined scorers register by name on a [`ScorerRegistry`] and are
//! referenced as `FuzzyFunc::Custom(name)`. Unknown names fail at pattern
//! registration, not at search time.

pub mod ratio;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::types::MatchError;

pub use ratio::{
    partial_ratio, partial_token_ratio, partial_token_set_ratio, partial_token_sort_ratio,
    quick_ratio, simple_ratio, token_ratio, token_set_ratio, token_sort_ratio, weighted_ratio,
};

/// A registered scoring function: two case-normalized strings to a ratio
/// in [0, 100].
pub type ScoreFn = Arc<dyn Fn(&str, &str) -> u32 + Send + Sync>;

/// Similarity strategy selector.
///
/// The string forms match the names accepted in pattern files and on the
/// CLI: `simple`, `partial`, `token_sort`, `token_set`, `token`,
/// `partial_token_sort`, `partial_token_set`, `partial_token`, `weighted`,
/// `quick`. Any other name parses as `Custom` and must be registered on
/// the [`ScorerRegistry`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FuzzyFunc {
    #[default]
    Simple,
    Partial,
    TokenSort,
    TokenSet,
    Token,
    PartialTokenSort,
    PartialTokenSet,
    PartialToken,
    Weighted,
    Quick,
    /// A user-registered scorer, resolved by name at registration time
    Custom(String),
}

impl FuzzyFunc {
    /// Strategy name as accepted in configuration
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Simple => "simple",
            Self::Partial => "partial",
            Self::TokenSort => "token_sort",
            Self::TokenSet => "token_set",
            Self::Token => "token",
            Self::PartialTokenSort => "partial_token_sort",
            Self::PartialTokenSet => "partial_token_set",
            Self::PartialToken => "partial_token",
            Self::Weighted => "weighted",
            Self::Quick => "quick",
            Self::Custom(name) => name,
        }
    }
}

impl FromStr for FuzzyFunc {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "simple" => Self::Simple,
            "partial" => Self::Partial,
            "token_sort" => Self::TokenSort,
            "token_set" => Self::TokenSet,
            "token" => Self::Token,
            "partial_token_sort" => Self::PartialTokenSort,
            "partial_token_set" => Self::PartialTokenSet,
            "partial_token" => Self::PartialToken,
            "weighted" => Self::Weighted,
            "quick" => Self::Quick,
            other => Self::Custom(other.to_owned()),
        })
    }
}

impl fmt::Display for FuzzyFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for FuzzyFunc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for FuzzyFunc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        FuzzyFunc::from_str(&name).map_err(D::Error::custom)
    }
}

/// Registry of scoring strategies.
///
/// Built-ins resolve without registration; custom strategies are added
/// with [`register`](Self::register) and validated eagerly when a pattern
/// referencing them is registered on a matcher.
#[derive(Default, Clone)]
pub struct ScorerRegistry {
    custom: HashMap<String, ScoreFn>,
}

impl ScorerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom scorer under `name`.
    ///
    /// Overwrites any previous scorer of the same name. Built-in names are
    /// shadowed only when referenced via `FuzzyFunc::Custom`, which never
    /// happens through parsing, so built-ins stay reachable.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        scorer: impl Fn(&str, &str) -> u32 + Send + Sync + 'static,
    ) {
        self.custom.insert(name.into(), Arc::new(scorer));
    }

    /// Resolve a strategy selector to a callable scorer.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownFuzzyFunc`] for a `Custom` name with no
    /// registered scorer. This is the fatal-at-registration check: callers
    /// resolve at `add` time so a typo never defaults silently.
    pub fn resolve(&self, func: &FuzzyFunc) -> Result<ScoreFn, MatchError> {
        let builtin: fn(&str, &str) -> u32 = match func {
            FuzzyFunc::Simple => simple_ratio,
            FuzzyFunc::Partial => partial_ratio,
            FuzzyFunc::TokenSort => token_sort_ratio,
            FuzzyFunc::TokenSet => token_set_ratio,
            FuzzyFunc::Token => token_ratio,
            FuzzyFunc::PartialTokenSort => partial_token_sort_ratio,
            FuzzyFunc::PartialTokenSet => partial_token_set_ratio,
            FuzzyFunc::PartialToken => partial_token_ratio,
            FuzzyFunc::Weighted => weighted_ratio,
            FuzzyFunc::Quick => quick_ratio,
            FuzzyFunc::Custom(name) => {
                return self
                    .custom
                    .get(name)
                    .cloned()
                    .ok_or_else(|| MatchError::UnknownFuzzyFunc(name.clone()));
            }
        };
        Ok(Arc::new(builtin))
    }
}

impl fmt::Debug for ScorerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScorerRegistry")
            .field("custom", &self.custom.keys().collect::<Vec<_>>())
            .finish()
    }
}
