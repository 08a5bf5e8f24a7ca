//! Predefined patterns for common formats.
//!
//! Keys mirror the classic commonregex set: `dates`, `times`, `phones`,
//! `phones_with_exts`, `links`, `emails`, `ips`, `ipv6s`, `prices`,
//! `hex_colors`, `credit_cards`, `btc_addresses`, `street_addresses`,
//! `zip_codes`, `po_boxes`, `ssn_number`. Patterns are written for the
//! `regex` crate (no lookaround) and compiled eagerly so a bad pattern
//! surfaces at construction rather than mid-search.

use std::collections::HashMap;

use regex::Regex;

use crate::core::types::MatchError;

const PREDEF_PATTERNS: &[(&str, &str)] = &[
    (
        "dates",
        r"(?i)\b(?:\d{1,2}(?:st|nd|rd|th)?\s+(?:of\s+)?)?(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t|tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?(?:\s+\d{1,2}(?:st|nd|rd|th)?)?(?:,?\s+\d{2,4})?\b|\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b",
    ),
    (
        "times",
        r"(?i)\b\d{1,2}:\d{2}(?::\d{2})?(?:\s?[ap]\.?m\.?)?\b|\b\d{1,2}\s?[ap]\.?m\.?\b",
    ),
    (
        "phones",
        r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
    ),
    (
        "phones_with_exts",
        r"(?i)(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\s?(?:ext|x|ext\.)\s?\d{2,7}",
    ),
    (
        "links",
        r"(?i)\b(?:https?://|www\.)[^\s<>\x22]+",
    ),
    (
        "emails",
        r"(?i)\b[a-z0-9._%+-]+@[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)+\b",
    ),
    ("ips", r"\b(?:\d{1,3}\.){3}\d{1,3}\b"),
    (
        "ipv6s",
        r"(?i)\b(?:[0-9a-f]{1,4}:){7}[0-9a-f]{1,4}\b|\b(?:[0-9a-f]{1,4}:){1,7}:(?:[0-9a-f]{1,4})?\b",
    ),
    (
        "prices",
        r"[$€£]\s?\d+(?:,\d{3})*(?:\.\d{1,2})?",
    ),
    ("hex_colors", r"#(?:[0-9a-fA-F]{3}){1,2}\b"),
    ("credit_cards", r"\b(?:\d{4}[-\s]?){3}\d{1,4}\b"),
    (
        "btc_addresses",
        r"\b[13][a-km-zA-HJ-NP-Z1-9]{25,34}\b",
    ),
    (
        "street_addresses",
        r"(?i)\b\d{1,5}\s(?:\w+\s){0,3}(?:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|court|ct|place|pl|square|sq|highway|hwy|parkway|pkwy)\.?\b",
    ),
    ("zip_codes", r"\b\d{5}(?:-\d{4})?\b"),
    (
        "po_boxes",
        r"(?i)\bp\.?\s?o\.?\s?box\s+\d+\b",
    ),
    ("ssn_number", r"\b\d{3}-\d{2}-\d{4}\b"),
];

/// Compile the full predefined registry.
///
/// # Errors
///
/// Returns [`MatchError::RegexParse`] if any pattern fails to compile;
/// with the shipped set this indicates a build of the regex crate with
/// features disabled, not caller error.
pub fn default_predefs() -> Result<HashMap<String, Regex>, MatchError> {
    let mut map = HashMap::with_capacity(PREDEF_PATTERNS.len());
    for (name, pattern) in PREDEF_PATTERNS {
        let compiled = Regex::new(pattern).map_err(|source| MatchError::RegexParse {
            pattern: (*pattern).to_owned(),
            source: Box::new(source),
        })?;
        map.insert((*name).to_owned(), compiled);
    }
    Ok(map)
}

/// The predefined pattern keys, in registry order.
#[must_use]
pub fn predef_keys() -> Vec<&'static str> {
    PREDEF_PATTERNS.iter().map(|(name, _)| *name).collect()
}
