//! # wordcount
//!
//! Word frequency statistics over free-form text.
//!
//! ## Features
//!
//! - Linear-time ASCII word tokenizer
//! - Composable analysis pipeline (tokenizer + token filters)
//! - Per-word counts, highest frequency, and deterministic top-N selection
//!
//! ## Example
//!
//! ```
//! use wordcount::prelude::*;
//!
//! let analyzer = WordFrequencyAnalyzer::new();
//! let text = "An apple is an apple.";
//!
//! assert_eq!(analyzer.calculate_frequency_for_word(text, "AN"), 2);
//! assert_eq!(analyzer.calculate_highest_frequency(text), 2);
//!
//! let top = analyzer.calculate_most_frequent_n_words(text, 1);
//! assert_eq!(top, vec![WordFrequency::new("an", 2)]);
//! ```

pub mod analysis;
pub mod error;
pub mod frequency;

pub mod prelude {
    pub use crate::error::{Result, WordCountError};
    pub use crate::frequency::{
        FrequencyAnalyzer, FrequencyConfig, FrequencyTable, WordFrequency, WordFrequencyAnalyzer,
    };
}
