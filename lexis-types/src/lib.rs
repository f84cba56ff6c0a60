//! Core types and contracts for the Lexis text-metrics pipeline.
//!
//! This crate provides the fundamental types that are shared across
//! the Lexis ecosystem. Keeping types separate ensures:
//!
//! - **Cross-crate compatibility**: Core and CLI share the same types
//! - **Rendering-agnostic reports**: Field names and shapes are stable
//!   and serializable, so any front-end can consume them
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A term (word or character) paired with its occurrence count.
///
/// Frequency tables are ordered by descending count; ties are broken by
/// first-seen order, so two reports over the same text are identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    /// The counted term. Single characters are stored as 1-char strings
    /// so word and character tables share one shape.
    pub term: String,
    /// Number of occurrences.
    pub count: u32,
}

impl TermCount {
    /// Creates a new term/count pair.
    #[inline]
    pub fn new(term: impl Into<String>, count: u32) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

impl fmt::Display for TermCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.term, self.count)
    }
}

/// Character-class tallies over cleaned text.
///
/// Cleaned text contains only ASCII alphanumerics and single spaces, so
/// these four classes partition it exactly:
/// `vowels + consonants + digits + spaces == char_count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClassCounts {
    /// Case-insensitive members of `{a, e, i, o, u}`.
    pub vowels: usize,
    /// ASCII alphabetic characters that are not vowels.
    pub consonants: usize,
    /// ASCII digits `0-9`.
    pub digits: usize,
    /// ASCII space separators.
    pub spaces: usize,
}

impl CharClassCounts {
    /// Total characters covered by the four classes.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.vowels + self.consonants + self.digits + self.spaces
    }
}

/// Sentiment polarity/subjectivity pair.
///
/// Produced by a [`SentimentScorer`] collaborator and passed through the
/// report unchanged. Polarity is in `[-1, 1]` (negative to positive),
/// subjectivity in `[0, 1]` (objective to subjective).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Polarity in `[-1, 1]`.
    pub polarity: f32,
    /// Subjectivity in `[0, 1]`.
    pub subjectivity: f32,
}

impl SentimentScore {
    /// A fully neutral, fully objective score.
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };

    /// Creates a score, clamping both components into their contract
    /// ranges so a misbehaving scorer cannot leak out-of-range values.
    #[inline]
    #[must_use]
    pub fn new(polarity: f32, subjectivity: f32) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "polarity={:+.2} subjectivity={:.2}",
            self.polarity, self.subjectivity
        )
    }
}

/// Contract for the external sentiment collaborator.
///
/// The pipeline does not implement sentiment analysis itself; it calls
/// whatever scorer the caller supplies and reports the result unchanged.
/// Implementations must return polarity in `[-1, 1]` and subjectivity in
/// `[0, 1]` — constructing the result via [`SentimentScore::new`]
/// guarantees this.
pub trait SentimentScorer {
    /// Scores the raw (uncleaned) input text.
    fn score(&self, text: &str) -> SentimentScore;
}

/// No-op scorer that reports every text as neutral and objective.
///
/// Useful when no NLP collaborator is wired in, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralScorer;

impl SentimentScorer for NeutralScorer {
    #[inline]
    fn score(&self, _text: &str) -> SentimentScore {
        SentimentScore::NEUTRAL
    }
}

/// Analysis configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Number of entries in the word-frequency table.
    pub top_words: usize,
    /// Number of entries in the character-frequency table.
    pub top_chars: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_words: 10,
            top_chars: 10,
        }
    }
}

impl AnalyzerConfig {
    /// Creates the minimal-variant configuration (top-5 words).
    #[must_use]
    pub const fn minimal() -> Self {
        Self {
            top_words: 5,
            top_chars: 10,
        }
    }
}

/// Errors that can occur when analyzing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeError {
    /// Input was empty or whitespace-only. This is the only
    /// caller-visible failure; every other input produces a full report.
    EmptyInput,
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::EmptyInput => {
                write!(f, "input is empty or whitespace-only")
            }
        }
    }
}

impl core::error::Error for AnalyzeError {}

/// The full metrics report for one analysis request.
///
/// A plain value object: no identity beyond its fields, recomputed fresh
/// per request, never persisted. Two distinct word counts are carried on
/// purpose — [`word_count`](Self::word_count) is measured on cleaned
/// text while the reading-time estimate uses the raw-text word count —
/// the divergence is part of the observed behavior and is preserved
/// rather than unified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Number of lines in the trimmed raw input.
    pub line_count: usize,
    /// Number of words in the cleaned text.
    pub word_count: usize,
    /// Number of characters in the cleaned text.
    pub char_count: usize,
    /// Vowel/consonant/digit/space tallies over the cleaned text.
    pub classes: CharClassCounts,
    /// Characters stripped by cleaning: `chars(raw) - chars(cleaned)`.
    /// A difference, not a direct classification — whitespace collapsed
    /// away by cleaning counts here too.
    pub special_count: usize,
    /// Uppercase characters in the raw text.
    pub uppercase_count: usize,
    /// Lowercase characters in the raw text.
    pub lowercase_count: usize,
    /// Top-K word frequencies after stopword and length filtering.
    pub top_words: Vec<TermCount>,
    /// Top-K character frequencies over the lowercased raw text,
    /// spaces and punctuation included, no filtering.
    pub top_chars: Vec<TermCount>,
    /// Word length → occurrence count, over the unfiltered token list.
    pub length_histogram: BTreeMap<usize, u32>,
    /// The cleaned text itself.
    pub cleaned_text: String,
    /// The cleaned text reversed character by character.
    pub reversed_text: String,
    /// Whether the cleaned text (spaces removed, lowercased) reads the
    /// same forwards and backwards.
    pub is_palindrome: bool,
    /// Estimated reading time in whole minutes, always at least 1.
    pub reading_time_min: u64,
    /// Heuristic readability score in `[0, 100]`.
    pub readability: f32,
    /// Sentiment as reported by the collaborator, unchanged.
    pub sentiment: SentimentScore,
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines, {} words, {} chars, readability {:.1}, ~{} min read",
            self.line_count, self.word_count, self.char_count, self.readability,
            self.reading_time_min
        )?;

        if self.is_palindrome {
            write!(f, ", palindrome")?;
        }

        Ok(())
    }
}
