//! ASCII letter tokenizer implementation.
//!
//! A word is a maximal run of ASCII letters (`a`-`z`, `A`-`Z`). Every other
//! character, including digits, punctuation, whitespace and any non-ASCII
//! character, separates words. Runs of separators are skipped as a whole, so
//! no empty tokens are produced.

use std::iter::FusedIterator;

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that emits maximal runs of ASCII letters.
///
/// The source case is preserved; pair it with
/// [`LowercaseFilter`](crate::analysis::token_filter::LowercaseFilter) to
/// fold words to lowercase.
#[derive(Clone, Debug, Default)]
pub struct AsciiLetterTokenizer;

impl AsciiLetterTokenizer {
    /// Create a new ASCII letter tokenizer.
    pub fn new() -> Self {
        AsciiLetterTokenizer
    }

    /// Iterate over the words of `text` without boxing.
    pub fn words<'a>(&self, text: &'a str) -> AsciiWords<'a> {
        AsciiWords::new(text)
    }
}

impl Tokenizer for AsciiLetterTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> TokenStream<'a> {
        Box::new(self.words(text))
    }

    fn name(&self) -> &'static str {
        "ascii_letter"
    }
}

/// Lazy iterator over the ASCII-letter words of a text.
///
/// Scans the text once with a forward byte cursor. Multi-byte UTF-8
/// sequences never contain ASCII bytes, so every word boundary is also a
/// `char` boundary.
#[derive(Clone, Debug)]
pub struct AsciiWords<'a> {
    text: &'a str,
    cursor: usize,
    position: usize,
}

impl<'a> AsciiWords<'a> {
    fn new(text: &'a str) -> Self {
        AsciiWords {
            text,
            cursor: 0,
            position: 0,
        }
    }
}

impl Iterator for AsciiWords<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let bytes = self.text.as_bytes();

        // Skip the separator run
        while self.cursor < bytes.len() && !bytes[self.cursor].is_ascii_alphabetic() {
            self.cursor += 1;
        }
        if self.cursor == bytes.len() {
            return None;
        }

        let start = self.cursor;
        while self.cursor < bytes.len() && bytes[self.cursor].is_ascii_alphabetic() {
            self.cursor += 1;
        }

        let token = Token::with_offsets(
            &self.text[start..self.cursor],
            self.position,
            start,
            self.cursor,
        );
        self.position += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At most one word per two remaining bytes, rounded up.
        let remaining = self.text.len() - self.cursor;
        (0, Some(remaining.div_ceil(2)))
    }
}

impl FusedIterator for AsciiWords<'_> {}
