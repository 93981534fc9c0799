//! Word analyzer: the default pipeline used for word counting.
//!
//! # Pipeline
//!
//! 1. AsciiLetterTokenizer (maximal runs of ASCII letters)
//! 2. LowercaseFilter
//! 3. MinLengthFilter (only when a minimum above 1 is set)
//! 4. StopFilter (only when stop words are set)
//!
//! # Examples
//!
//! ```
//! use wordcount::analysis::analyzer::{Analyzer, WordAnalyzer};
//! use wordcount::analysis::token_filter::StopFilter;
//!
//! let analyzer = WordAnalyzer::new().with_stop_filter(StopFilter::english());
//! let tokens: Vec<_> = analyzer.analyze("Hello the World, and test!").collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "test");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, MinLengthFilter, StopFilter};
use crate::analysis::tokenizer::AsciiLetterTokenizer;

/// Analyzer producing lowercase ASCII words.
#[derive(Clone)]
pub struct WordAnalyzer {
    inner: PipelineAnalyzer,
}

impl WordAnalyzer {
    /// Create a word analyzer with no length or stop word filtering.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(AsciiLetterTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("word");

        WordAnalyzer { inner: analyzer }
    }

    /// Drop words shorter than `min_length` bytes.
    ///
    /// A minimum of 0 or 1 keeps every word and adds no filter.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        if min_length > 1 {
            self.inner = self
                .inner
                .add_filter(Arc::new(MinLengthFilter::new(min_length)));
        }
        self
    }

    /// Drop words contained in the given stop filter.
    ///
    /// An empty stop filter adds nothing to the pipeline.
    pub fn with_stop_filter(mut self, stop_filter: StopFilter) -> Self {
        if !stop_filter.is_empty() {
            self.inner = self.inner.add_filter(Arc::new(stop_filter));
        }
        self
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for WordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

impl std::fmt::Debug for WordAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn texts(analyzer: &WordAnalyzer, text: &str) -> Vec<String> {
        analyzer.analyze(text).map(|token| token.text).collect()
    }

    #[test]
    fn test_word_analyzer() {
        let analyzer = WordAnalyzer::new();

        let tokens: Vec<Token> = analyzer
            .analyze("blueberry Blueberry. BANANA! apple apple apple?")
            .collect();

        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0].text, "blueberry");
        assert_eq!(tokens[1].text, "blueberry");
        assert_eq!(tokens[2].text, "banana");
        assert_eq!(tokens[5].text, "apple");
        assert_eq!(tokens[5].position, 5);
    }

    #[test]
    fn test_word_analyzer_empty_text() {
        let analyzer = WordAnalyzer::new();
        assert!(texts(&analyzer, "").is_empty());
        assert!(texts(&analyzer, "42 -- 17!").is_empty());
    }

    #[test]
    fn test_word_analyzer_with_min_length() {
        let analyzer = WordAnalyzer::new().with_min_length(3);
        assert_eq!(texts(&analyzer, "An apple is an APPLE"), vec!["apple", "apple"]);
        assert_eq!(analyzer.inner().filters().len(), 2);
    }

    #[test]
    fn test_word_analyzer_min_length_one_adds_no_filter() {
        let analyzer = WordAnalyzer::new().with_min_length(1);
        assert_eq!(analyzer.inner().filters().len(), 1);
    }

    #[test]
    fn test_word_analyzer_with_stop_filter() {
        let analyzer = WordAnalyzer::new().with_stop_filter(StopFilter::from_words(vec!["An"]));
        assert_eq!(
            texts(&analyzer, "An apple is an apple"),
            vec!["apple", "is", "apple"]
        );
    }

    #[test]
    fn test_word_analyzer_name() {
        assert_eq!(WordAnalyzer::new().name(), "word");
    }

    #[test]
    fn test_word_analyzer_name_follows_inner_pipeline() {
        let analyzer = WordAnalyzer::new()
            .with_min_length(2)
            .with_stop_filter(StopFilter::english());
        assert_eq!(analyzer.name(), analyzer.inner().name());
    }
}
