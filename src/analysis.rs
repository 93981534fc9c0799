//! Text analysis module for wordcount.
//!
//! This module turns raw text into a stream of normalized words. A
//! [`Tokenizer`](tokenizer::Tokenizer) splits the text, a chain of
//! [`Filter`](token_filter::Filter)s normalizes the tokens, and an
//! [`Analyzer`](analyzer::Analyzer) ties the two together.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
