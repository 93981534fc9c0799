//! Stop filter implementation.
//!
//! This module provides a filter that removes stop words before they are
//! counted. A built-in English list is available, as well as custom lists.
//!
//! # Examples
//!
//! ```
//! use wordcount::analysis::token_filter::Filter;
//! use wordcount::analysis::token_filter::stop::StopFilter;
//! use wordcount::analysis::token::Token;
//!
//! let filter = StopFilter::english();
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// Default English stop words list.
pub const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// A filter that removes stop words from the token stream.
///
/// Stop words are stored in ASCII lowercase and compared against the token
/// text as-is, so this filter belongs after
/// [`LowercaseFilter`](super::LowercaseFilter) in a pipeline.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with the built-in English stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordcount::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::english();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(!filter.is_stop_word("apple"));
    /// ```
    pub fn english() -> Self {
        Self::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Create a stop filter from a list of words.
    ///
    /// Words are folded to ASCII lowercase.
    ///
    /// ```
    /// use wordcount::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["Foo", "bar", "BAR"]);
    /// assert_eq!(filter.len(), 2);
    /// assert!(filter.is_stop_word("foo"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words
            .into_iter()
            .map(|word| {
                let mut word = word.into();
                word.make_ascii_lowercase();
                word
            })
            .collect();

        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Check if a (lowercase) word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl Filter for StopFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(tokens.filter(move |token| !self.is_stop_word(&token.text)))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
