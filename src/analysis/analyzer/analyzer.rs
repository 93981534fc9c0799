//! Core analyzer trait definition.
//!
//! Analyzers are the complete text processing pipeline in front of the
//! frequency table:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → FrequencyTable
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`WordAnalyzer`](super::WordAnalyzer) - ASCII words, lowercased, with optional length and stop word filtering
//! - [`PipelineAnalyzer`](super::PipelineAnalyzer) - Custom tokenizer + filter chains
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use wordcount::analysis::analyzer::Analyzer;
//! use wordcount::analysis::token::TokenStream;
//!
//! struct NothingAnalyzer;
//!
//! impl Analyzer for NothingAnalyzer {
//!     fn analyze<'a>(&'a self, _text: &'a str) -> TokenStream<'a> {
//!         Box::new(std::iter::empty())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "nothing"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve concurrent
/// callers.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a lazy stream of tokens.
    ///
    /// This performs the complete pipeline, tokenization and all configured
    /// filters. The stream borrows both the analyzer and the text.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordcount::analysis::analyzer::{Analyzer, WordAnalyzer};
    ///
    /// let analyzer = WordAnalyzer::new();
    /// let tokens: Vec<_> = analyzer.analyze("The quick, brown fox").collect();
    ///
    /// assert_eq!(tokens.len(), 4);
    /// assert_eq!(tokens[0].text, "the");
    /// ```
    fn analyze<'a>(&'a self, text: &'a str) -> TokenStream<'a>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}
