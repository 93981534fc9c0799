//! Token filter implementations for token transformation.

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// Filters are lazy: the returned stream pulls from the input stream on
/// demand.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lowercase;
pub mod min_length;
pub mod stop;

// Re-export all filters for convenient access
pub use lowercase::LowercaseFilter;
pub use min_length::MinLengthFilter;
pub use stop::StopFilter;
