use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single token in a tokenized document.
///
/// Tokens are produced by an external tokenizer and are immutable once built.
/// Each token knows its surface text, a lowercase form used when matching
/// case-insensitively, its character span in the source text, and its index
/// position in the token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text of the token
    pub text: String,

    /// Lowercase form, precomputed at construction
    pub norm: String,

    /// Character offset of the first character in the source text
    pub start_char: usize,

    /// Character offset one past the last character in the source text
    pub end_char: usize,

    /// Index position in the token sequence
    pub index: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start_char: usize, index: usize) -> Self {
        let text = text.into();
        let norm = text.to_lowercase();
        let end_char = start_char + text.chars().count();
        Self {
            text,
            norm,
            start_char,
            end_char,
            index,
        }
    }
}

/// A tokenized document: the source text plus its ordered token sequence.
///
/// The token sequence supports random access by index range, which the
/// scanner and optimizer rely on for window slicing. A `Doc` is read-only
/// after construction and can be shared freely across concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doc {
    /// Original source text
    pub text: String,

    /// Tokens in document order
    pub tokens: Vec<Token>,
}

impl Doc {
    /// Build a document from pre-tokenized input.
    ///
    /// Token char spans are assumed to be consistent with `text`; the
    /// tokenizer producing them is an external collaborator.
    #[must_use]
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    /// Number of tokens in the document
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The source text covered by the token window `[start, end)`.
    ///
    /// Includes any inter-token characters (whitespace, punctuation glue)
    /// that fall between the window's first and last token, so the slice
    /// reads exactly as it does in the source. Returns an empty string for
    /// degenerate or out-of-bounds windows.
    #[must_use]
    pub fn window_text(&self, start: usize, end: usize) -> &str {
        if start >= end || end > self.tokens.len() {
            return "";
        }
        let char_start = self.tokens[start].start_char;
        let char_end = self.tokens[end - 1].end_char;
        slice_by_chars(&self.text, char_start, char_end)
    }

    /// Find the token window exactly covering the character span
    /// `[char_start, char_end)`, if one exists.
    ///
    /// Returns `None` when either boundary falls inside a token or in
    /// inter-token whitespace, mirroring how a span lookup behaves in
    /// token-aligned NLP pipelines.
    #[must_use]
    pub fn char_span(&self, char_start: usize, char_end: usize) -> Option<(usize, usize)> {
        let start = self
            .tokens
            .iter()
            .position(|t| t.start_char == char_start)?;
        let end = self.tokens.iter().position(|t| t.end_char == char_end)?;
        if start > end {
            return None;
        }
        Some((start, end + 1))
    }

    /// Map every character offset covered by a token to that token's index.
    ///
    /// Characters between tokens (whitespace the tokenizer split on) have no
    /// entry. Used by the regex policy to expand partial character-level
    /// matches out to token boundaries.
    #[must_use]
    pub fn char_to_token_map(&self) -> HashMap<usize, usize> {
        let mut map = HashMap::new();
        for token in &self.tokens {
            for offset in token.start_char..token.end_char {
                map.insert(offset, token.index);
            }
        }
        map
    }
}

/// Slice a string by character offsets rather than byte offsets.
///
/// Token spans are recorded in characters so that scoring is not sensitive
/// to UTF-8 byte widths; this converts back when extracting window text.
fn slice_by_chars(text: &str, char_start: usize, char_end: usize) -> &str {
    let mut indices = text.char_indices().map(|(i, _)| i);
    let byte_start = indices.nth(char_start).unwrap_or(text.len());
    let byte_end = if char_end > char_start {
        text.char_indices()
            .map(|(i, _)| i)
            .nth(char_end)
            .unwrap_or(text.len())
    } else {
        byte_start
    };
    &text[byte_start..byte_end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::whitespace_tokenize;

    #[test]
    fn test_window_text_spans_whitespace() {
        let doc = whitespace_tokenize("Ridley Scott was the director");
        assert_eq!(doc.window_text(0, 2), "Ridley Scott");
        assert_eq!(doc.window_text(2, 5), "was the director");
        assert_eq!(doc.window_text(3, 3), "");
        assert_eq!(doc.window_text(0, 99), "");
    }

    #[test]
    fn test_char_span_exact_boundaries() {
        let doc = whitespace_tokenize("call (555) 555-5555 now");
        // "(555)" occupies chars 5..10
        assert_eq!(doc.char_span(5, 10), Some((1, 2)));
        // span starting mid-token is not token-aligned
        assert_eq!(doc.char_span(6, 10), None);
    }

    #[test]
    fn test_char_to_token_map_skips_gaps() {
        let doc = whitespace_tokenize("ab cd");
        let map = doc.char_to_token_map();
        assert_eq!(map.get(&0), Some(&0));
        assert_eq!(map.get(&1), Some(&0));
        assert_eq!(map.get(&2), None); // the space
        assert_eq!(map.get(&3), Some(&1));
    }

    #[test]
    fn test_unicode_window_text() {
        let doc = whitespace_tokenize("Åland Islands ferry");
        assert_eq!(doc.window_text(0, 2), "Åland Islands");
        assert_eq!(doc.tokens[1].start_char, 6);
    }
}
