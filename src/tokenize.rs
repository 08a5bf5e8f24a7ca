//! Whitespace tokenization adapter.
//!
//! Real deployments feed the matchers from an upstream tokenizer (the
//! `Doc` contract only requires ordered tokens with character spans).
//! This adapter covers the CLI and tests: split on Unicode whitespace,
//! record character offsets, keep punctuation glued to its word.

use crate::core::token::{Doc, Token};

/// Tokenize `text` by splitting on whitespace, producing a [`Doc`] whose
/// token char spans index into `text` by character offset.
#[must_use]
pub fn whitespace_tokenize(text: &str) -> Doc {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut current = String::new();

    for (offset, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            if let Some(start) = word_start.take() {
                tokens.push(Token::new(std::mem::take(&mut current), start, tokens.len()));
            }
        } else {
            if word_start.is_none() {
                word_start = Some(offset);
            }
            current.push(ch);
        }
    }
    if let Some(start) = word_start {
        tokens.push(Token::new(current, start, tokens.len()));
    }

    Doc::new(text, tokens)
}
