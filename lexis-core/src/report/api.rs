//! Public API for running the analysis pipeline.

use std::collections::BTreeMap;

use lexis_types::{AnalyzeError, AnalyzerConfig, MetricsReport, SentimentScorer};

use crate::analyzer::classifier::{case_counts, classify};
use crate::analyzer::normalizer::TextCleaner;
use crate::analyzer::stopwords;
use crate::analyzer::tokenizer::Tokenizer;
use crate::report::derived;
use crate::report::frequency::StableCounter;

/// The text-metrics pipeline.
///
/// Chains cleaning → classification → tokenization → frequency
/// aggregation → derived scores into one [`MetricsReport`]. A single
/// `analyze` call runs the whole chain to completion; there is no
/// intermediate state, and the analyzer itself is immutable, so one
/// instance can serve any number of requests (or threads).
pub struct TextAnalyzer {
    cleaner: TextCleaner,
    tokenizer: Tokenizer,
    config: AnalyzerConfig,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    /// Creates an analyzer with the default configuration (top-10
    /// frequency tables).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an analyzer with custom configuration.
    #[must_use]
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            cleaner: TextCleaner::new(),
            tokenizer: Tokenizer::new(),
            config,
        }
    }

    /// Returns the active configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Runs the full pipeline over `raw` and returns the report.
    ///
    /// Sentiment is delegated to `scorer` and passed through unchanged;
    /// callers without an NLP collaborator can pass
    /// [`NeutralScorer`](lexis_types::NeutralScorer).
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::EmptyInput`] if the trimmed input is
    /// empty. Every other input succeeds: inputs that clean down to
    /// nothing (pure punctuation) still produce a full report with
    /// zeroed counts and fallback scores.
    pub fn analyze(
        &self,
        raw: &str,
        scorer: &dyn SentimentScorer,
    ) -> Result<MetricsReport, AnalyzeError> {
        if raw.trim().is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }

        let cleaned = self.cleaner.clean(raw);

        let line_count = raw.trim().split('\n').count();
        let classes = classify(&cleaned);
        let char_count = cleaned.chars().count();
        // Difference formula: everything cleaning dropped, including
        // collapsed whitespace. Never reclassify cleaned text instead.
        let special_count = raw.chars().count() - char_count;
        let (uppercase_count, lowercase_count) = case_counts(raw);

        // One tokenizer pass feeds the word count, the unfiltered
        // length histogram, and the filtered frequency table.
        let mut word_count = 0usize;
        let mut length_histogram: BTreeMap<usize, u32> = BTreeMap::new();
        let mut word_counter: StableCounter<String> = StableCounter::new();

        self.tokenizer.tokenize(&cleaned, |token, _pos| {
            word_count += 1;
            *length_histogram.entry(token.len()).or_insert(0) += 1;

            let lowered = token.to_ascii_lowercase();
            if stopwords::admits(&lowered) {
                word_counter.add(lowered);
            }
        });

        // Character table runs over the lowercased *raw* text with no
        // filtering; spaces and punctuation compete with letters.
        let mut char_counter: StableCounter<char> = StableCounter::with_capacity(64);
        for c in raw.chars().flat_map(char::to_lowercase) {
            char_counter.add(c);
        }

        let reversed_text = derived::reverse(&cleaned);
        let is_palindrome = derived::is_palindrome(&cleaned);

        Ok(MetricsReport {
            line_count,
            word_count,
            char_count,
            classes,
            special_count,
            uppercase_count,
            lowercase_count,
            top_words: word_counter.top_k(self.config.top_words),
            top_chars: char_counter.top_k(self.config.top_chars),
            length_histogram,
            reversed_text,
            is_palindrome,
            reading_time_min: derived::reading_time_min(raw),
            readability: derived::readability(raw),
            sentiment: scorer.score(raw),
            cleaned_text: cleaned,
        })
    }
}
