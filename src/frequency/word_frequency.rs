//! The (word, frequency) pair returned by top-N queries.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A word together with the number of times it occurs in a text.
///
/// Values are ordered by rank: higher frequency first, then ascending word.
/// Sorting a `Vec<WordFrequency>` therefore yields the top-N order.
///
/// # Examples
///
/// ```
/// use wordcount::frequency::WordFrequency;
///
/// let mut ranked = vec![
///     WordFrequency::new("blueberry", 2),
///     WordFrequency::new("apple", 3),
///     WordFrequency::new("banana", 2),
/// ];
/// ranked.sort();
///
/// assert_eq!(ranked[0].word(), "apple");
/// assert_eq!(ranked[1].word(), "banana");
/// assert_eq!(ranked[2].to_string(), "blueberry: 2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordFrequency {
    word: String,
    frequency: usize,
}

impl WordFrequency {
    /// Create a new word frequency pair.
    pub fn new<S: Into<String>>(word: S, frequency: usize) -> Self {
        WordFrequency {
            word: word.into(),
            frequency,
        }
    }

    /// The lowercase word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// How many times the word occurs.
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    /// Split into the owned word and its frequency.
    pub fn into_parts(self) -> (String, usize) {
        (self.word, self.frequency)
    }
}

impl Ord for WordFrequency {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for WordFrequency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WordFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_frequency_accessors() {
        let wf = WordFrequency::new("apple", 3);
        assert_eq!(wf.word(), "apple");
        assert_eq!(wf.frequency(), 3);
        assert_eq!(wf.into_parts(), ("apple".to_string(), 3));
    }

    #[test]
    fn test_rank_ordering() {
        let apple = WordFrequency::new("apple", 3);
        let banana = WordFrequency::new("banana", 2);
        let blueberry = WordFrequency::new("blueberry", 2);

        assert!(apple < banana);
        assert!(banana < blueberry);
        assert_eq!(apple.cmp(&apple.clone()), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(WordFrequency::new("banana", 1).to_string(), "banana: 1");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&WordFrequency::new("apple", 3)).unwrap();
        assert_eq!(json, r#"{"word":"apple","frequency":3}"#);

        let wf: WordFrequency = serde_json::from_str(&json).unwrap();
        assert_eq!(wf, WordFrequency::new("apple", 3));
    }
}
