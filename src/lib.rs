//! # fuzzphrase
//!
//! A library for approximate multi-token phrase matching in plain text.
//!
//! Exact string search fails the moment text contains typos, OCR noise,
//! or alternate spellings. "Ridley Scot" should still find "Ridley
//! Scott", and "fuzy matching" should still find "fuzzy matching".
//!
//! `fuzzphrase` solves this by scoring every plausible token window of a
//! document against the query phrase, refining window boundaries, and
//! ranking the survivors deterministically.
//!
//! ## Features
//!
//! - **Similarity strategies**: simple, partial, token-sort, token-set,
//!   and weighted ratios, plus caller-registered custom scorers
//! - **Boundary optimization**: candidate windows are refined by a
//!   bounded grid of edge adjustments
//! - **Two-stage thresholds**: a cheap scan threshold prunes windows
//!   before the expensive refinement stage
//! - **Labeled pattern groups**: register many phrases per label and
//!   search them all in one pass
//! - **Regex patterns**: character-level regexes mapped back to token
//!   spans, with a predefined registry for common entity shapes
//!
//! ## Example
//!
//! ```rust
//! use fuzzphrase::matching::FuzzyMatcher;
//! use fuzzphrase::tokenize::whitespace_tokenize;
//!
//! let mut matcher = FuzzyMatcher::new();
//! matcher
//!     .add("NAME", vec![whitespace_tokenize("Ridley Scott")], None)
//!     .unwrap();
//!
//! let doc = whitespace_tokenize("The film was directed by Ridley Scot in 1979.");
//! let matches = matcher.find_matches(&doc);
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(doc.window_text(matches[0].start, matches[0].end), "Ridley Scot");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Tokenized documents, spans, and search configuration
//! - [`similarity`]: Ratio functions and the scorer registry
//! - [`matching`]: Scan, optimize, and rank pipeline plus the matcher
//! - [`regexmatch`]: Regex patterns aligned to token spans
//! - [`tokenize`]: A whitespace tokenizer for callers without their own
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod regexmatch;
pub mod similarity;
pub mod tokenize;

// Re-export commonly used types for convenience
pub use crate::core::config::{RegexConfig, SearchConfig};
pub use crate::core::token::{Doc, Token};
pub use crate::core::types::*;
pub use matching::{FuzzyMatcher, FuzzySearcher};
pub use regexmatch::RegexMatcher;
pub use similarity::FuzzyFunc;
