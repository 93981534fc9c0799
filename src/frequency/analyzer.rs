//! Word frequency queries over free-form text.
//!
//! [`WordFrequencyAnalyzer`] is stateless after construction: every query
//! analyzes its text from scratch and keeps nothing between calls, so one
//! instance can serve concurrent callers.
//!
//! # Examples
//!
//! ```
//! use wordcount::frequency::{FrequencyAnalyzer, WordFrequency, WordFrequencyAnalyzer};
//!
//! let analyzer = WordFrequencyAnalyzer::new();
//! let text = "blueberry blueberry banana banana";
//!
//! assert_eq!(analyzer.calculate_frequency_for_word(text, "Banana"), 2);
//! assert_eq!(analyzer.calculate_highest_frequency(text), 2);
//! assert_eq!(
//!     analyzer.calculate_most_frequent_n_words(text, 1),
//!     vec![WordFrequency::new("banana", 2)]
//! );
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::analysis::analyzer::{Analyzer, WordAnalyzer};
use crate::error::Result;
use crate::frequency::config::FrequencyConfig;
use crate::frequency::table::FrequencyTable;
use crate::frequency::word_frequency::WordFrequency;

/// The word frequency query contract.
pub trait FrequencyAnalyzer: Send + Sync {
    /// The largest number of occurrences of any word in `text`, or 0 when the
    /// text contains no words.
    fn calculate_highest_frequency(&self, text: &str) -> usize;

    /// How many times `word` occurs in `text`, ignoring ASCII case.
    fn calculate_frequency_for_word(&self, text: &str, word: &str) -> usize;

    /// The `n` most frequent words of `text`, by frequency descending and then
    /// word ascending.
    ///
    /// The result holds `min(n, distinct words)` entries.
    fn calculate_most_frequent_n_words(&self, text: &str, n: usize) -> Vec<WordFrequency>;
}

/// [`FrequencyAnalyzer`] backed by an analysis pipeline.
#[derive(Clone)]
pub struct WordFrequencyAnalyzer {
    analyzer: Arc<dyn Analyzer>,
}

impl WordFrequencyAnalyzer {
    /// Create an analyzer counting every ASCII word.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(WordAnalyzer::new()))
    }

    /// Create an analyzer from a validated configuration.
    pub fn from_config(config: &FrequencyConfig) -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(config.build_analyzer()?)))
    }

    /// Create an analyzer on top of a custom analysis pipeline.
    ///
    /// The pipeline is expected to emit lowercase words; query words are
    /// ASCII-lowercased before comparison.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        WordFrequencyAnalyzer { analyzer }
    }

    /// Get the analysis pipeline.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Aggregate `text` into a table that can answer several queries.
    pub fn frequency_table(&self, text: &str) -> FrequencyTable {
        FrequencyTable::from_tokens(self.analyzer.analyze(text))
    }
}

impl Default for WordFrequencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyAnalyzer for WordFrequencyAnalyzer {
    #[tracing::instrument(level = "trace", skip_all, fields(text_len = text.len()))]
    fn calculate_highest_frequency(&self, text: &str) -> usize {
        let table = self.frequency_table(text);
        let highest = table.highest_frequency();

        debug!(
            distinct_words = table.distinct_words(),
            total_words = table.total_words(),
            highest,
            "calculated highest frequency"
        );
        highest
    }

    #[tracing::instrument(level = "trace", skip_all, fields(text_len = text.len()))]
    fn calculate_frequency_for_word(&self, text: &str, word: &str) -> usize {
        let word = word.to_ascii_lowercase();
        let frequency = self
            .analyzer
            .analyze(text)
            .filter(|token| token.text == word)
            .count();

        debug!(frequency, "calculated frequency for word");
        frequency
    }

    #[tracing::instrument(level = "trace", skip_all, fields(text_len = text.len(), n = n))]
    fn calculate_most_frequent_n_words(&self, text: &str, n: usize) -> Vec<WordFrequency> {
        if n == 0 {
            return Vec::new();
        }

        let table = self.frequency_table(text);
        let top = table.most_frequent(n);

        debug!(
            distinct_words = table.distinct_words(),
            returned = top.len(),
            "calculated most frequent words"
        );
        top
    }
}

impl std::fmt::Debug for WordFrequencyAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordFrequencyAnalyzer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
