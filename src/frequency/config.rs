//! Configuration for word frequency analysis.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::analyzer::WordAnalyzer;
use crate::analysis::token_filter::StopFilter;
use crate::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS;
use crate::error::{Result, WordCountError};

/// Configuration of the word analysis pipeline.
///
/// The default configuration counts every ASCII word, which is the plain
/// word-count behavior. Missing JSON fields fall back to their defaults.
///
/// # Examples
///
/// ```
/// use wordcount::frequency::FrequencyConfig;
///
/// let config = FrequencyConfig::from_json(r#"{ "min_word_length": 3 }"#).unwrap();
/// assert_eq!(config.min_word_length, 3);
/// assert!(config.stop_words.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    /// Words shorter than this are not counted. Must be at least 1.
    pub min_word_length: usize,

    /// Words that are never counted, matched case-insensitively.
    pub stop_words: Vec<String>,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            min_word_length: 1,
            stop_words: Vec::new(),
        }
    }
}

impl FrequencyConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FrequencyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the minimum word length.
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Replace the stop words.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Add the built-in English stop words.
    pub fn with_english_stop_words(mut self) -> Self {
        self.stop_words
            .extend(DEFAULT_ENGLISH_STOP_WORDS.iter().map(|word| word.to_string()));
        self
    }

    /// Check that every value can take effect.
    ///
    /// A stop word that is empty or contains anything but ASCII letters could
    /// never match a word and is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.min_word_length == 0 {
            warn!("rejecting configuration with min_word_length 0");
            return Err(WordCountError::invalid_config(
                "min_word_length must be at least 1",
            ));
        }

        if let Some(word) = self
            .stop_words
            .iter()
            .find(|word| word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()))
        {
            warn!(stop_word = %word, "rejecting configuration with unmatchable stop word");
            return Err(WordCountError::invalid_config(format!(
                "stop word {word:?} must be a non-empty run of ASCII letters"
            )));
        }

        Ok(())
    }

    /// Validate this configuration and build the matching analyzer.
    pub fn build_analyzer(&self) -> Result<WordAnalyzer> {
        self.validate()?;

        Ok(WordAnalyzer::new()
            .with_min_length(self.min_word_length)
            .with_stop_filter(StopFilter::from_words(self.stop_words.iter().cloned())))
    }
}
