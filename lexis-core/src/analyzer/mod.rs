//! Text analysis pipeline stages.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Cleans raw text into the canonical form
//! - **Tokenizer**: Splits cleaned text into word tokens
//! - **Classifier**: Tallies character classes and case counts
//! - **Stopwords**: Closed filter list for frequency analysis

pub mod classifier;
pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use normalizer::TextCleaner;
pub use tokenizer::Tokenizer;
