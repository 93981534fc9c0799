//! Per-word occurrence counts.
//!
//! A [`FrequencyTable`] consumes a token stream once and answers any number
//! of frequency queries afterwards. The sum of all counts always equals the
//! number of tokens consumed.
//!
//! # Examples
//!
//! ```
//! use wordcount::analysis::analyzer::{Analyzer, WordAnalyzer};
//! use wordcount::frequency::{FrequencyTable, WordFrequency};
//!
//! let analyzer = WordAnalyzer::new();
//! let table = FrequencyTable::from_tokens(analyzer.analyze("a b a c a b"));
//!
//! assert_eq!(table.frequency("a"), 3);
//! assert_eq!(table.highest_frequency(), 3);
//! assert_eq!(table.total_words(), 6);
//! assert_eq!(
//!     table.most_frequent(2),
//!     vec![WordFrequency::new("a", 3), WordFrequency::new("b", 2)]
//! );
//! ```

use ahash::AHashMap;

use crate::analysis::token::Token;
use crate::frequency::word_frequency::WordFrequency;

/// Mapping from distinct word to its number of occurrences.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    counts: AHashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate every token of the stream.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut table = Self::new();
        table.extend(tokens);
        table
    }

    /// Count one occurrence of `word`.
    pub fn add<S: Into<String>>(&mut self, word: S) {
        *self.counts.entry(word.into()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `word`, compared exactly. 0 if absent.
    pub fn frequency(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// The largest count of any word, or 0 for an empty table.
    pub fn highest_frequency(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// Number of words counted, duplicates included.
    pub fn total_words(&self) -> usize {
        self.total
    }

    /// Check if no word has been counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
    }

    /// The `n` highest ranked words: frequency descending, ties broken by
    /// ascending word.
    ///
    /// Returns every word when `n` exceeds the number of distinct words.
    pub fn most_frequent(&self, n: usize) -> Vec<WordFrequency> {
        if n == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<WordFrequency> = self
            .counts
            .iter()
            .map(|(word, &count)| WordFrequency::new(word.as_str(), count))
            .collect();

        // Partition around the n-th element first so only the kept prefix
        // needs a full sort.
        if n < ranked.len() {
            ranked.select_nth_unstable(n);
            ranked.truncate(n);
        }
        ranked.sort_unstable();
        ranked
    }

    /// Same selection as [`most_frequent`](Self::most_frequent), returned in
    /// ascending word order.
    ///
    /// ```
    /// use wordcount::analysis::analyzer::{Analyzer, WordAnalyzer};
    /// use wordcount::frequency::{FrequencyTable, WordFrequency};
    ///
    /// let text = "blueberry blueberry. banana! apple apple apple?";
    /// let table = FrequencyTable::from_tokens(WordAnalyzer::new().analyze(text));
    ///
    /// assert_eq!(
    ///     table.most_frequent_alphabetical(3),
    ///     vec![
    ///         WordFrequency::new("apple", 3),
    ///         WordFrequency::new("banana", 1),
    ///         WordFrequency::new("blueberry", 2),
    ///     ]
    /// );
    /// ```
    pub fn most_frequent_alphabetical(&self, n: usize) -> Vec<WordFrequency> {
        let mut selected = self.most_frequent(n);
        selected.sort_unstable_by(|a, b| a.word().cmp(b.word()));
        selected
    }
}

impl Extend<Token> for FrequencyTable {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, tokens: I) {
        for token in tokens {
            self.add(token.text);
        }
    }
}

impl FromIterator<Token> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = Token>>(tokens: I) -> Self {
        Self::from_tokens(tokens)
    }
}
