//! The ratio family: edit-distance-derived similarity scores in [0, 100].
//!
//! All functions are pure and total: empty input on either side scores 0,
//! never panics. Case normalization is the caller's responsibility (the
//! searcher lowercases both sides when `ignore_case` is set), so nothing
//! here touches case except the token-set helpers, which compare words
//! as given.

/// Basic ratio: normalized Levenshtein similarity over raw characters.
#[must_use]
pub fn simple_ratio(s1: &str, s2: &str) -> u32 {
    if s1.is_empty() || s2.is_empty() {
        return 0;
    }
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();
    let dist = strsim::levenshtein(s1, s2);
    to_ratio(dist, len1.max(len2))
}

/// Partial ratio: the best `simple_ratio` between the shorter string and
/// any equal-length character window of the longer one.
///
/// Handles partial overlap, e.g. an abbreviation scored against the full
/// form it abbreviates.
#[must_use]
pub fn partial_ratio(s1: &str, s2: &str) -> u32 {
    if s1.is_empty() || s2.is_empty() {
        return 0;
    }

    let (shorter, longer) = if s1.chars().count() <= s2.chars().count() {
        (s1, s2)
    } else {
        (s2, s1)
    };

    let longer_chars: Vec<char> = longer.chars().collect();
    let shorter_len = shorter.chars().count();

    if shorter_len == longer_chars.len() {
        return simple_ratio(shorter, longer);
    }

    let mut best = 0;
    for start in 0..=(longer_chars.len() - shorter_len) {
        let window: String = longer_chars[start..start + shorter_len].iter().collect();
        let score = simple_ratio(shorter, &window);
        if score > best {
            best = score;
        }
        if best == 100 {
            break;
        }
    }
    best
}

/// Token-sort ratio: sort whitespace-separated words alphabetically on
/// both sides, then score. Handles word reordering.
#[must_use]
pub fn token_sort_ratio(s1: &str, s2: &str) -> u32 {
    simple_ratio(&sorted_words(s1), &sorted_words(s2))
}

/// Token-set ratio: compare via word-set intersection and differences.
///
/// Handles reordering together with duplicated or extra words. The score
/// is the best of comparing the shared words against each side's full
/// word set and the two full sets against each other.
#[must_use]
pub fn token_set_ratio(s1: &str, s2: &str) -> u32 {
    let words1 = unique_sorted_words(s1);
    let words2 = unique_sorted_words(s2);
    if words1.is_empty() || words2.is_empty() {
        return 0;
    }

    let shared: Vec<&str> = words1
        .iter()
        .filter(|w| words2.binary_search(w).is_ok())
        .map(String::as_str)
        .collect();
    let only1: Vec<&str> = words1
        .iter()
        .filter(|w| words2.binary_search(w).is_err())
        .map(String::as_str)
        .collect();
    let only2: Vec<&str> = words2
        .iter()
        .filter(|w| words1.binary_search(w).is_err())
        .map(String::as_str)
        .collect();

    let shared_str = shared.join(" ");
    let combined1 = join_nonempty(&shared_str, &only1.join(" "));
    let combined2 = join_nonempty(&shared_str, &only2.join(" "));

    let mut best = simple_ratio(&combined1, &combined2);
    if !shared_str.is_empty() {
        best = best
            .max(simple_ratio(&shared_str, &combined1))
            .max(simple_ratio(&shared_str, &combined2));
    }
    best
}

/// Token ratio: the better of token-sort and token-set.
#[must_use]
pub fn token_ratio(s1: &str, s2: &str) -> u32 {
    token_sort_ratio(s1, s2).max(token_set_ratio(s1, s2))
}

/// Partial token-sort ratio: `partial_ratio` over word-sorted strings.
#[must_use]
pub fn partial_token_sort_ratio(s1: &str, s2: &str) -> u32 {
    partial_ratio(&sorted_words(s1), &sorted_words(s2))
}

/// Partial token-set ratio: `partial_ratio` over deduplicated
/// word-sorted strings.
#[must_use]
pub fn partial_token_set_ratio(s1: &str, s2: &str) -> u32 {
    partial_ratio(
        &unique_sorted_words(s1).join(" "),
        &unique_sorted_words(s2).join(" "),
    )
}

/// Partial token ratio: the better of the two partial token variants.
#[must_use]
pub fn partial_token_ratio(s1: &str, s2: &str) -> u32 {
    partial_token_sort_ratio(s1, s2).max(partial_token_set_ratio(s1, s2))
}

// Weighted-ratio scaling. Token methods always carry the same discount;
// the partial discount depends on how disparate the lengths are, since a
// partial hit inside a much longer string is weaker evidence.
const TOKEN_WEIGHT: f64 = 0.95;
const PARTIAL_WEIGHT: f64 = 0.9;
const PARTIAL_WEIGHT_DISPARATE: f64 = 0.6;
const LENGTH_RATIO_PARTIAL: f64 = 1.5;
const LENGTH_RATIO_DISPARATE: f64 = 8.0;

/// Weighted ratio: blend of the other strategies, taking the maximum
/// after scaling for length disparity.
///
/// For similar-length inputs the basic and token ratios compete; once the
/// lengths diverge the partial variants take over, discounted harder the
/// more disparate the lengths are.
#[must_use]
pub fn weighted_ratio(s1: &str, s2: &str) -> u32 {
    if s1.is_empty() || s2.is_empty() {
        return 0;
    }

    let len1 = s1.chars().count();
    let len2 = s2.chars().count();
    #[allow(clippy::cast_precision_loss)]
    let length_ratio = len1.max(len2) as f64 / len1.min(len2) as f64;

    let base = f64::from(simple_ratio(s1, s2));

    let best = if length_ratio < LENGTH_RATIO_PARTIAL {
        base.max(f64::from(token_ratio(s1, s2)) * TOKEN_WEIGHT)
    } else {
        let partial_weight = if length_ratio < LENGTH_RATIO_DISPARATE {
            PARTIAL_WEIGHT
        } else {
            PARTIAL_WEIGHT_DISPARATE
        };
        base.max(f64::from(partial_ratio(s1, s2)) * partial_weight)
            .max(f64::from(partial_token_ratio(s1, s2)) * TOKEN_WEIGHT * partial_weight)
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        best.round() as u32
    }
}

/// Quick ratio: the basic ratio with only the empty-input guard.
///
/// Kept as a distinct strategy name so pattern files written against the
/// full strategy roster resolve without translation.
#[must_use]
pub fn quick_ratio(s1: &str, s2: &str) -> u32 {
    simple_ratio(s1, s2)
}

fn to_ratio(dist: usize, max_len: usize) -> u32 {
    debug_assert!(max_len > 0);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (100.0 * (1.0 - dist as f64 / max_len as f64)).round() as u32
    }
}

fn sorted_words(s: &str) -> String {
    let mut words: Vec<&str> = s.split_whitespace().collect();
    words.sort_unstable();
    words.join(" ")
}

fn unique_sorted_words(s: &str) -> Vec<String> {
    let mut words: Vec<String> = s.split_whitespace().map(str::to_owned).collect();
    words.sort_unstable();
    words.dedup();
    words
}

fn join_nonempty(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_owned(),
        (_, true) => a.to_owned(),
        _ => format!("{a} {b}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_ratio_identical_and_empty() {
        assert_eq!(simple_ratio("grok", "grok"), 100);
        assert_eq!(simple_ratio("", ""), 0);
        assert_eq!(simple_ratio("grok", ""), 0);
    }

    #[test]
    fn test_simple_ratio_close_strings() {
        // one substitution in five characters
        assert_eq!(simple_ratio("hello", "hallo"), 80);
    }

    #[test]
    fn test_partial_ratio_substring() {
        assert_eq!(partial_ratio("test", "this is a test"), 100);
        assert_eq!(partial_ratio("this is a test", "test"), 100);
    }

    #[test]
    fn test_token_sort_ratio_reordering() {
        assert_eq!(token_sort_ratio("fuzzy wuzzy", "wuzzy fuzzy"), 100);
        assert!(token_sort_ratio("fuzzy wuzzy", "wuzzy bear") < 100);
    }

    #[test]
    fn test_token_set_ratio_extra_words() {
        // shared words dominate despite the duplicate
        assert_eq!(token_set_ratio("fuzzy was a bear", "fuzzy fuzzy was a bear"), 100);
        assert_eq!(token_set_ratio("", "fuzzy"), 0);
    }

    #[test]
    fn test_weighted_ratio_prefers_best_method() {
        assert_eq!(weighted_ratio("grok", "grok"), 100);
        // reordered words: token path should lift the score above base
        let reordered = weighted_ratio("hello world", "world hello");
        assert!(reordered >= 90, "got {reordered}");
        // partial path for disparate lengths
        let partial = weighted_ratio("test", "this is a test of the emergency system");
        assert!(partial >= 50, "got {partial}");
    }

    #[test]
    fn test_ratios_are_symmetric() {
        for f in [simple_ratio, partial_ratio, token_sort_ratio, token_set_ratio] {
            assert_eq!(f("port hedland", "hedland port"), f("hedland port", "port hedland"));
        }
    }
}
