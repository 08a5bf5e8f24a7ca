//! Regex matching over tokenized documents.
//!
//! Patterns run over the raw text and hits are mapped back to token
//! spans, with optional expansion of mid-token hits to full token
//! boundaries. A registry of predefined patterns covers common entity
//! shapes (phones, emails, prices, addresses). Scoring reduces
//! engine-reported edit counts to the same 0..=100 ratio scale the
//! fuzzy pipeline uses, so both kinds of match rank together.

pub mod matcher;
pub mod predef;
pub mod searcher;
pub mod weights;

pub use matcher::RegexMatcher;
pub use predef::{default_predefs, predef_keys};
pub use searcher::{RegexHit, RegexSearcher};
pub use weights::{normalize_counts, CountWeights, FuzzyCounts};
