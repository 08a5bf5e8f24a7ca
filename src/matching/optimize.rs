use crate::core::config::ResolvedConfig;
use crate::core::token::Doc;
use crate::core::types::{Candidate, SpanMatch};

/// Refine one candidate's boundaries to maximize its ratio, then apply the
/// final acceptance threshold.
///
/// When the coarse ratio already meets `thresh` (or `flex` is zero), the
/// candidate's window is accepted as-is — the fast path for exact and
/// near-exact hits. Otherwise every `(ds, de)` boundary-shift combination
/// in `[-flex, flex]²` is rescored, skipping degenerate and out-of-bounds
/// windows, and the single best combination wins.
///
/// Ties on ratio go first to the combination closest to the original
/// window (smallest `|ds| + |de|`), then to the longer window. Preferring
/// length over a marginally higher ratio is deliberate, if occasionally
/// surprising: short accidental windows are the ones downstream
/// deduplication punishes, so when ratios round to the same value the
/// wider context wins.
///
/// Returns `None` when the best ratio stays below `min_r2`.
pub fn optimize(
    doc: &Doc,
    candidate: Candidate,
    config: &ResolvedConfig,
    compare: &dyn Fn(usize, usize) -> u32,
) -> Option<SpanMatch> {
    let mut best = SpanMatch {
        start: candidate.start,
        end: candidate.end,
        ratio: candidate.ratio,
    };

    if config.flex > 0 && candidate.ratio < config.thresh {
        let flex = i64::try_from(config.flex).unwrap_or(i64::MAX);
        let doc_len = doc.len() as i64;
        let orig_start = candidate.start as i64;
        let orig_end = candidate.end as i64;

        let mut best_shift = 0u64;
        for ds in -flex..=flex {
            let start = orig_start + ds;
            if start < 0 || start >= doc_len {
                continue;
            }
            for de in -flex..=flex {
                if ds == 0 && de == 0 {
                    continue;
                }
                let end = orig_end + de;
                if end <= start || end > doc_len {
                    continue;
                }

                #[allow(clippy::cast_sign_loss)]
                let (start, end) = (start as usize, end as usize);
                let ratio = compare(start, end);
                let shift = ds.unsigned_abs() + de.unsigned_abs();
                let len = end - start;

                let improves = ratio > best.ratio
                    || (ratio == best.ratio
                        && (shift < best_shift || (shift == best_shift && len > best.len())));
                if improves {
                    best = SpanMatch { start, end, ratio };
                    best_shift = shift;
                }
            }
        }
    }

    (best.ratio >= config.min_r2).then_some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SearchConfig;
    use crate::core::config::{Flex, FlexName};
    use crate::similarity::simple_ratio;
    use crate::tokenize::whitespace_tokenize;

    fn compare_fn<'a>(doc: &'a Doc, query_text: &'a str) -> impl Fn(usize, usize) -> u32 + 'a {
        move |start, end| simple_ratio(query_text, &doc.window_text(start, end).to_lowercase())
    }

    #[test]
    fn test_expands_to_better_window() {
        // Query spans three tokens; seed the candidate one token short and
        // let the grid widen it to the exact window.
        let doc = whitespace_tokenize("the united states of america");
        let query = "united states of";
        let compare = compare_fn(&doc, query);
        let candidate = Candidate {
            start: 1,
            end: 3,
            ratio: compare(1, 3),
        };
        let config = SearchConfig::default().resolve(3);
        let m = optimize(&doc, candidate, &config, &compare).unwrap();
        assert_eq!((m.start, m.end), (1, 4));
        assert_eq!(m.ratio, 100);
    }

    #[test]
    fn test_zero_flex_returns_window_unchanged() {
        let doc = whitespace_tokenize("grant andersen visited");
        let query = "grant andersen";
        let compare = compare_fn(&doc, query);
        let candidate = Candidate {
            start: 0,
            end: 2,
            ratio: compare(0, 2),
        };
        let config = SearchConfig {
            flex: Flex::Named(FlexName::Min),
            ..SearchConfig::default()
        }
        .resolve(2);
        let m = optimize(&doc, candidate, &config, &compare).unwrap();
        assert_eq!((m.start, m.end), (0, 2));
    }

    #[test]
    fn test_thresh_short_circuits() {
        let doc = whitespace_tokenize("exact match here");
        let query = "exact match";
        let compare = compare_fn(&doc, query);
        let candidate = Candidate {
            start: 0,
            end: 2,
            ratio: 100,
        };
        let config = SearchConfig::default().resolve(2);
        let m = optimize(&doc, candidate, &config, &compare).unwrap();
        assert_eq!((m.start, m.end, m.ratio), (0, 2, 100));

        // same candidate through a scorer that would prefer a different
        // window: the fast path must not consult it
        let sabotage = |_: usize, _: usize| 0u32;
        let m = optimize(&doc, candidate, &config, &sabotage).unwrap();
        assert_eq!((m.start, m.end, m.ratio), (0, 2, 100));
    }

    #[test]
    fn test_rejects_below_min_r2() {
        let doc = whitespace_tokenize("completely unrelated words");
        let query = "quantum chromodynamics";
        let compare = compare_fn(&doc, query);
        let candidate = Candidate {
            start: 0,
            end: 2,
            ratio: compare(0, 2),
        };
        let config = SearchConfig::default().resolve(2);
        assert!(optimize(&doc, candidate, &config, &compare).is_none());
    }

    #[test]
    fn test_tie_prefers_window_closest_to_original() {
        // A scorer that is indifferent between all windows: the original
        // window must win every tie.
        let doc = whitespace_tokenize("a b c d e");
        let compare = |_: usize, _: usize| 80u32;
        let candidate = Candidate {
            start: 1,
            end: 3,
            ratio: 80,
        };
        let config = SearchConfig {
            min_r: 75,
            ..SearchConfig::default()
        }
        .resolve(2);
        let m = optimize(&doc, candidate, &config, &compare).unwrap();
        assert_eq!((m.start, m.end), (1, 3));
    }

    #[test]
    fn test_tie_at_equal_shift_prefers_longer_window() {
        // Indifferent scorer again, but seed with ratio below what the grid
        // reports so the original window loses and shifted windows tie.
        let doc = whitespace_tokenize("a b c d e");
        let compare = |_: usize, _: usize| 90u32;
        let candidate = Candidate {
            start: 1,
            end: 3,
            ratio: 80,
        };
        let config = SearchConfig::default().resolve(2);
        let m = optimize(&doc, candidate, &config, &compare).unwrap();
        // shift of 1: (0,3), (2,3), (1,2), (1,4) all score 90; longer wins
        assert_eq!(m.ratio, 90);
        assert_eq!(m.len(), 3);
        assert!(m.start == 0 || m.end == 4);
    }
}
