//! Core data types for phrase matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Token`] and [`Doc`]: the tokenized input consumed by every matcher
//! - [`SearchConfig`] / [`ResolvedConfig`]: per-query matching settings,
//!   with clamping and derived defaults applied at resolution time
//! - [`Candidate`], [`SpanMatch`], [`PatternMatch`]: the units flowing
//!   through scan → optimize → rank
//! - [`MatchError`] and [`ConfigWarning`]: the error/warning taxonomy
//!
//! ## Indices
//!
//! All spans are half-open token-index ranges `[start, end)` into the
//! document's token sequence. Character offsets appear only at the regex
//! boundary, where hits are mapped back onto tokens.

pub mod config;
pub mod token;
pub mod types;

pub use config::{Flex, FlexName, RegexConfig, ResolvedConfig, SearchConfig};
pub use token::{Doc, Token};
pub use types::{Candidate, ConfigWarning, MatchError, PatternMatch, SpanMatch};
