//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline, responsible for
//! splitting input text into words.
//!
//! # Available Tokenizers
//!
//! - [`ascii_letter::AsciiLetterTokenizer`] - Maximal runs of ASCII letters
//!
//! # Examples
//!
//! ```
//! use wordcount::analysis::tokenizer::Tokenizer;
//! use wordcount::analysis::tokenizer::AsciiLetterTokenizer;
//!
//! let tokenizer = AsciiLetterTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared across threads.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use wordcount::analysis::token::{Token, TokenStream};
/// use wordcount::analysis::tokenizer::Tokenizer;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize<'a>(&self, text: &'a str) -> TokenStream<'a> {
///         Box::new(
///             text.split(',')
///                 .enumerate()
///                 .map(|(i, s)| Token::new(s.trim(), i)),
///         )
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a lazy stream of tokens.
    ///
    /// Calling this again on the same text restarts the sequence.
    fn tokenize<'a>(&self, text: &'a str) -> TokenStream<'a>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod ascii_letter;

pub use ascii_letter::AsciiLetterTokenizer;
