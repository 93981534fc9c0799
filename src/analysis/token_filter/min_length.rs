//! Minimum length filter implementation.

use super::Filter;

use crate::analysis::token::TokenStream;

/// A filter that drops tokens shorter than a minimum length.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a new filter keeping tokens of at least `min_length` bytes.
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }

    /// Get the minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Filter for MinLengthFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(tokens.filter(move |token| token.len() >= self.min_length))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
