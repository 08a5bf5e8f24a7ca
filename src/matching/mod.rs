//! The fuzzy phrase search-and-optimize pipeline.
//!
//! Matching proceeds in three stages per query:
//!
//! 1. **Scan** ([`scan`]): an O(N) coarse pass scoring every window of
//!    query length against a low threshold (`min_r1`), producing
//!    candidates.
//! 2. **Optimize** ([`optimize`]): each candidate's boundaries are shifted
//!    within `±flex` tokens over the full shift grid, keeping the best
//!    rescored window; a high threshold (`min_r2`) gates acceptance and
//!    `thresh` short-circuits near-perfect coarse hits.
//! 3. **Rank** ([`rank`]): matches sort by (start, length desc, ratio
//!    desc) and same-query subsumed duplicates are dropped.
//!
//! [`FuzzySearcher`] wires the stages together for one query;
//! [`FuzzyMatcher`] manages labeled pattern sets and exposes the
//! matcher-level contract (`add` / `find_matches` / post-search hooks).
//!
//! ## Example
//!
//! ```rust
//! use fuzzphrase::matching::FuzzyMatcher;
//! use fuzzphrase::tokenize::whitespace_tokenize;
//!
//! let mut matcher = FuzzyMatcher::new();
//! matcher.add("NAME", vec![whitespace_tokenize("Ridley Scott")], None).unwrap();
//!
//! let doc = whitespace_tokenize("Ridley Scott was the director of Alien.");
//! let matches = matcher.find_matches(&doc);
//! assert_eq!(matches[0].ratio, 100);
//! ```

pub mod matcher;
pub mod optimize;
pub mod rank;
pub mod scan;
pub mod searcher;

pub use matcher::{FuzzyMatcher, OnMatch};
pub use optimize::optimize;
pub use rank::rank;
pub use scan::scan;
pub use searcher::FuzzySearcher;
