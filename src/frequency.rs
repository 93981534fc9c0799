//! Word frequency aggregation and queries.
//!
//! - [`FrequencyTable`] aggregates a token stream into per-word counts.
//! - [`WordFrequencyAnalyzer`] runs the analysis pipeline and answers the
//!   [`FrequencyAnalyzer`] queries.
//! - [`FrequencyConfig`] configures the pipeline.

pub mod analyzer;
pub mod config;
pub mod table;
pub mod word_frequency;

pub use analyzer::{FrequencyAnalyzer, WordFrequencyAnalyzer};
pub use config::FrequencyConfig;
pub use table::FrequencyTable;
pub use word_frequency::WordFrequency;
