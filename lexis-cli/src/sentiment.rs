//! Lexicon-based sentiment collaborator.
//!
//! A small stand-in for a full NLP sentiment library: it scores text by
//! counting hits against fixed positive/negative word lists. The core
//! pipeline only sees the [`SentimentScorer`] contract, so swapping in
//! a real NLP backend means replacing this module and nothing else.

use lexis_core::analyzer::{TextCleaner, Tokenizer};
use lexis_types::{SentimentScore, SentimentScorer};

const POSITIVE: [&str; 20] = [
    "good", "great", "excellent", "happy", "love", "wonderful", "best",
    "amazing", "nice", "fantastic", "joy", "beautiful", "awesome", "brilliant",
    "delight", "pleasant", "superb", "positive", "success", "win",
];

const NEGATIVE: [&str; 20] = [
    "bad", "terrible", "awful", "sad", "hate", "horrible", "worst", "angry",
    "ugly", "poor", "pain", "fail", "wrong", "broken", "negative", "annoying",
    "disappointing", "miserable", "gloomy", "loss",
];

/// Scores sentiment from fixed word lists.
///
/// Polarity is the signed share of sentiment-bearing words,
/// `(positive − negative) / (positive + negative)`; subjectivity is the
/// fraction of words that carry sentiment at all. Texts with no hits
/// score fully neutral and objective.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer {
    cleaner: TextCleaner,
    tokenizer: Tokenizer,
}

impl LexiconScorer {
    /// Creates a new scorer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let cleaned = self.cleaner.clean(text);

        let mut positive = 0usize;
        let mut negative = 0usize;
        let mut total = 0usize;

        self.tokenizer.tokenize(&cleaned, |token, _pos| {
            total += 1;
            let lowered = token.to_ascii_lowercase();
            if POSITIVE.contains(&lowered.as_str()) {
                positive += 1;
            } else if NEGATIVE.contains(&lowered.as_str()) {
                negative += 1;
            }
        });

        let hits = positive + negative;
        if hits == 0 || total == 0 {
            return SentimentScore::NEUTRAL;
        }

        SentimentScore::new(
            (positive as f32 - negative as f32) / hits as f32,
            hits as f32 / total as f32,
        )
    }
}
