//! End-to-end behavior of the fuzzy search pipeline through the public
//! library API: scan thresholds, boundary refinement, ranking, and the
//! configuration clamping rules.

use fuzzphrase::core::config::{Flex, SearchConfig};
use fuzzphrase::core::types::ConfigWarning;
use fuzzphrase::matching::FuzzyMatcher;
use fuzzphrase::tokenize::whitespace_tokenize;
use fuzzphrase::RegexMatcher;

/// An exact occurrence always scores 100 at the exact token span.
#[test]
fn test_exact_phrase_scores_100() {
    let mut matcher = FuzzyMatcher::new();
    matcher
        .add("ANIMAL", vec![whitespace_tokenize("fuzzy wuzzy")], None)
        .unwrap();

    let doc = whitespace_tokenize("the fuzzy wuzzy bear had no hair");
    let matches = matcher.find_matches(&doc);

    assert_eq!(matches.len(), 1);
    assert_eq!((matches[0].start, matches[0].end), (1, 3));
    assert_eq!(matches[0].ratio, 100);
}

/// A one-character typo in a long-enough phrase still matches.
#[test]
fn test_misspelling_still_matches() {
    let mut matcher = FuzzyMatcher::new();
    matcher
        .add("NAME", vec![whitespace_tokenize("Ridley Scott")], None)
        .unwrap();

    let doc = whitespace_tokenize("Alien was directed by Ridley Scot in 1979");
    let matches = matcher.find_matches(&doc);

    assert_eq!(matches.len(), 1);
    assert_eq!(doc.window_text(matches[0].start, matches[0].end), "Ridley Scot");
    assert!(matches[0].ratio >= 90);
}

/// A window at exactly `min_r2` is accepted; one below is not.
#[test]
fn test_acceptance_threshold_is_inclusive() {
    let mut matcher = FuzzyMatcher::new();
    matcher
        .add("Q", vec![whitespace_tokenize("abcd")], None)
        .unwrap();

    // one substitution in four chars: ratio 75, the default min_r2
    let at_threshold = whitespace_tokenize("x abcc y");
    assert_eq!(matcher.find_matches(&at_threshold).len(), 1);

    // two substitutions: ratio 50, past the scan gate but under min_r2
    let below_threshold = whitespace_tokenize("x abdd y");
    assert!(matcher.find_matches(&below_threshold).is_empty());
}

/// Repeated searches over the same input are byte-for-byte identical.
#[test]
fn test_search_is_deterministic() {
    let mut matcher = FuzzyMatcher::new();
    matcher
        .add("GPE", vec![whitespace_tokenize("Nizhny Novgorod")], None)
        .unwrap();
    matcher
        .add("NAME", vec![whitespace_tokenize("Grigori Sokolov")], None)
        .unwrap();

    let doc = whitespace_tokenize(
        "Grigori Sokolow was born near Nizhny Nowgorod and later toured from Nizny Novgorod",
    );
    let first = matcher.find_matches(&doc);
    let second = matcher.find_matches(&doc);

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

/// With `flex` zeroed, spans never move off the scanned window.
#[test]
fn test_zero_flex_keeps_scanned_boundaries() {
    let config = SearchConfig {
        flex: Flex::Tokens(0),
        ..SearchConfig::default()
    };
    let mut matcher = FuzzyMatcher::new();
    matcher
        .add(
            "Q",
            vec![whitespace_tokenize("grand piano")],
            Some(vec![config]),
        )
        .unwrap();

    let doc = whitespace_tokenize("she bought a grand piano yesterday");
    let matches = matcher.find_matches(&doc);

    assert_eq!(matches.len(), 1);
    // query is two tokens, so the span is exactly two tokens wide
    assert_eq!(matches[0].end - matches[0].start, 2);
}

/// Out-of-range `flex` values clamp and surface a warning.
#[test]
fn test_flex_clamps_with_warning() {
    let config = SearchConfig {
        flex: Flex::Tokens(-5),
        ..SearchConfig::default()
    };
    let resolved = config.resolve(3);
    assert_eq!(resolved.flex, 0);
    assert!(resolved
        .warnings
        .iter()
        .any(|w| matches!(w, ConfigWarning::FlexBelowZero { requested: -5 })));

    let config = SearchConfig {
        flex: Flex::Tokens(10),
        ..SearchConfig::default()
    };
    let resolved = config.resolve(3);
    assert_eq!(resolved.flex, 3);
}

/// `min_r1` above `min_r2` is lowered rather than honored.
#[test]
fn test_threshold_ordering_is_enforced() {
    let config = SearchConfig {
        min_r1: Some(90),
        min_r2: Some(80),
        flex: Flex::Tokens(1),
        ..SearchConfig::default()
    };
    let resolved = config.resolve(4);
    assert_eq!(resolved.min_r1, 80);
    assert!(resolved
        .warnings
        .iter()
        .any(|w| matches!(w, ConfigWarning::MinR1AboveMinR2 { .. })));
}

/// Case folding is on by default and can be disabled per pattern.
#[test]
fn test_case_sensitivity_toggle() {
    let doc = whitespace_tokenize("we flew into PARIS at dawn");

    let mut folding = FuzzyMatcher::new();
    folding
        .add("GPE", vec![whitespace_tokenize("paris")], None)
        .unwrap();
    assert_eq!(folding.find_matches(&doc).len(), 1);

    let sensitive = SearchConfig {
        ignore_case: false,
        ..SearchConfig::default()
    };
    let mut strict = FuzzyMatcher::new();
    strict
        .add(
            "GPE",
            vec![whitespace_tokenize("paris")],
            Some(vec![sensitive]),
        )
        .unwrap();
    assert!(strict.find_matches(&doc).is_empty());
}

/// Empty documents and empty matchers both yield empty results.
#[test]
fn test_empty_inputs() {
    let mut matcher = FuzzyMatcher::new();
    matcher
        .add("Q", vec![whitespace_tokenize("anything")], None)
        .unwrap();
    assert!(matcher.find_matches(&whitespace_tokenize("")).is_empty());

    let empty = FuzzyMatcher::new();
    let doc = whitespace_tokenize("some ordinary text");
    assert!(empty.find_matches(&doc).is_empty());
}

/// Results come back grouped by label in sorted label order.
#[test]
fn test_output_grouped_by_sorted_label() {
    let mut matcher = FuzzyMatcher::new();
    matcher
        .add("ZEBRA", vec![whitespace_tokenize("stripes")], None)
        .unwrap();
    matcher
        .add("APPLE", vec![whitespace_tokenize("orchard")], None)
        .unwrap();

    let doc = whitespace_tokenize("stripes in the orchard");
    let matches = matcher.find_matches(&doc);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].label, "APPLE");
    assert_eq!(matches[1].label, "ZEBRA");
}

/// Fuzzy and regex matchers report on the same span and ratio scale.
#[test]
fn test_fuzzy_and_regex_spans_align() {
    let doc = whitespace_tokenize("invoice 555-555-5555 for fuzzy wuzzy");

    let mut fuzzy = FuzzyMatcher::new();
    fuzzy
        .add("ANIMAL", vec![whitespace_tokenize("fuzzy wuzzy")], None)
        .unwrap();
    let fuzzy_matches = fuzzy.find_matches(&doc);
    assert_eq!((fuzzy_matches[0].start, fuzzy_matches[0].end), (3, 5));

    let mut regex = RegexMatcher::new().unwrap();
    regex
        .add("PHONE", vec![r"\d{3}-\d{3}-\d{4}".to_owned()], None)
        .unwrap();
    let regex_matches = regex.find_matches(&doc);
    assert_eq!((regex_matches[0].start, regex_matches[0].end), (1, 2));
    assert_eq!(regex_matches[0].ratio, 100);
}
