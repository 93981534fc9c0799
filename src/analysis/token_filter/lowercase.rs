//! Lowercase filter implementation.
//!
//! This module provides a filter that folds token text to lowercase, which is
//! what makes word counting case-insensitive. Only ASCII letters are folded;
//! the tokenizer never emits anything else.
//!
//! # Examples
//!
//! ```
//! use wordcount::analysis::token_filter::Filter;
//! use wordcount::analysis::token_filter::lowercase::LowercaseFilter;
//! use wordcount::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that converts tokens to ASCII lowercase.
///
/// Positions and offsets are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(tokens.map(|mut token| {
            token.text.make_ascii_lowercase();
            token
        }))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
