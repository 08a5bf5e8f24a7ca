use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::ConfigWarning;
use crate::similarity::FuzzyFunc;

/// Default final acceptance threshold (`min_r2` when not set explicitly)
pub const DEFAULT_MIN_R: u32 = 75;

/// Default optimization short-circuit threshold
pub const DEFAULT_THRESH: u32 = 100;

/// Boundary-shift budget for the optimizer.
///
/// Symbolic values resolve against the query length at search time:
/// `Default` is half the query length, `Max` the full length, `Min` zero.
/// Integer values outside `[0, query_len]` are clamped with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flex {
    /// Symbolic: "default", "max", or "min"
    Named(FlexName),
    /// Explicit token count; negative values clamp to zero
    Tokens(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexName {
    Default,
    Max,
    Min,
}

impl Default for Flex {
    fn default() -> Self {
        Flex::Named(FlexName::Default)
    }
}

/// Matching settings for one query, with all fields defaulted.
///
/// Immutable once registered. Thresholds interact: `min_r1` gates the
/// coarse scan, `min_r2` gates the optimized result, and `thresh`
/// short-circuits optimization for near-perfect coarse hits. Unset
/// `min_r1`/`min_r2` derive from `min_r`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Lowercase both sides before scoring
    pub ignore_case: bool,

    /// Similarity strategy used for every comparison
    pub fuzzy_func: FuzzyFunc,

    /// Final acceptance threshold; also the source for derived defaults
    pub min_r: u32,

    /// Coarse-scan threshold; `None` derives `round(min_r / 1.5)`
    pub min_r1: Option<u32>,

    /// Post-optimization threshold; `None` derives `min_r`
    pub min_r2: Option<u32>,

    /// Boundary-shift budget
    pub flex: Flex,

    /// Skip optimization when the coarse ratio already reaches this
    pub thresh: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ignore_case: true,
            fuzzy_func: FuzzyFunc::Simple,
            min_r: DEFAULT_MIN_R,
            min_r1: None,
            min_r2: None,
            flex: Flex::default(),
            thresh: DEFAULT_THRESH,
        }
    }
}

/// A `SearchConfig` with symbolic values resolved against a concrete query
/// and all corrections applied. The search pipeline only ever sees this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub ignore_case: bool,
    pub min_r1: u32,
    pub min_r2: u32,
    pub flex: usize,
    pub thresh: u32,

    /// Corrections applied during resolution, in application order
    pub warnings: Vec<ConfigWarning>,
}

impl SearchConfig {
    /// Resolve this configuration against a query of `query_len` tokens.
    ///
    /// Out-of-range values are corrected rather than rejected: `flex` is
    /// clamped into `[0, query_len]`, `min_r1 > min_r2` lowers `min_r1`,
    /// and `thresh < min_r2` raises `thresh`. With `flex == 0` the scan is
    /// the only pass, so `min_r1` is forced up to `min_r2`. Every
    /// correction is recorded and logged.
    #[must_use]
    pub fn resolve(&self, query_len: usize) -> ResolvedConfig {
        let mut warnings = Vec::new();

        let flex = self.calc_flex(query_len, &mut warnings);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let derived_r1 = (f64::from(self.min_r) / 1.5).round() as u32;
        let mut min_r1 = self.min_r1.unwrap_or(derived_r1);
        let min_r2 = self.min_r2.unwrap_or(self.min_r);
        let mut thresh = self.thresh;

        if flex > 0 {
            if min_r1 > min_r2 {
                let warning = ConfigWarning::MinR1AboveMinR2 { min_r1, min_r2 };
                warn!("{warning}");
                warnings.push(warning);
                min_r1 = min_r2;
            }
            if thresh < min_r2 {
                let warning = ConfigWarning::ThreshBelowMinR2 { thresh, min_r2 };
                warn!("{warning}");
                warnings.push(warning);
                thresh = min_r2;
            }
        } else {
            // No optimization pass will run, so the scan must apply the
            // final acceptance threshold itself.
            min_r1 = min_r2;
        }

        ResolvedConfig {
            ignore_case: self.ignore_case,
            min_r1,
            min_r2,
            flex,
            thresh,
            warnings,
        }
    }

    fn calc_flex(&self, query_len: usize, warnings: &mut Vec<ConfigWarning>) -> usize {
        match self.flex {
            Flex::Named(FlexName::Default) => query_len / 2,
            Flex::Named(FlexName::Max) => query_len,
            Flex::Named(FlexName::Min) => 0,
            Flex::Tokens(requested) => {
                if requested < 0 {
                    let warning = ConfigWarning::FlexBelowZero { requested };
                    warn!("{warning}");
                    warnings.push(warning);
                    0
                } else if requested as u64 > query_len as u64 {
                    let warning = ConfigWarning::FlexAboveQueryLen {
                        requested,
                        used: query_len,
                    };
                    warn!("{warning}");
                    warnings.push(warning);
                    query_len
                } else {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    {
                        requested as usize
                    }
                }
            }
        }
    }
}

/// Settings for one regex pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegexConfig {
    /// Expand matches that end mid-token out to token boundaries
    pub partial: bool,

    /// Treat the pattern string as a predefined-registry key
    pub predef: bool,

    /// Minimum ratio for a regex match to be kept
    pub min_r: u32,

    /// Weighting scheme for fuzzy edit counts
    pub fuzzy_weights: crate::regexmatch::CountWeights,
}

impl Default for RegexConfig {
    fn default() -> Self {
        Self {
            partial: true,
            predef: false,
            min_r: DEFAULT_MIN_R,
            fuzzy_weights: crate::regexmatch::CountWeights::Indel,
        }
    }
}
