//! Error types for the wordcount library.
//!
//! The query operations of [`WordFrequencyAnalyzer`](crate::frequency::WordFrequencyAnalyzer)
//! never fail. Errors only arise while building an analyzer from a
//! [`FrequencyConfig`](crate::frequency::FrequencyConfig).
//!
//! # Examples
//!
//! ```
//! use wordcount::error::{Result, WordCountError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordCountError::invalid_config("min_word_length must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for wordcount operations.
#[derive(Error, Debug)]
pub enum WordCountError {
    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordCountError.
pub type Result<T> = std::result::Result<T, WordCountError>;

impl WordCountError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordCountError::InvalidConfig(msg.into())
    }
}
