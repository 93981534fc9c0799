//! Token types for text analysis.
//!
//! A [`Token`] is one word occurrence flowing through the analysis pipeline.
//! Tokens carry their text, their position in the stream, and the byte
//! offsets of the word in the source text.
//!
//! # Examples
//!
//! ```
//! use wordcount::analysis::token::Token;
//!
//! let token = Token::with_offsets("apple", 1, 3, 8);
//! assert_eq!(token.text, "apple");
//! assert_eq!(token.position, 1);
//! assert_eq!(token.start_offset, 3);
//! assert_eq!(token.end_offset, 8);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single word after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream is a lazy sequence of tokens from the analysis pipeline.
///
/// The stream may borrow the text it was produced from.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;
