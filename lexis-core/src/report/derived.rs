//! Derived-metric calculators.
//!
//! Small pure functions computed after counting: reading time,
//! readability, palindrome detection, and the reversed-text echo.
//!
//! Reading time and readability are measured on the **raw** text with a
//! plain whitespace split, not on cleaned-text tokens. The headline word
//! count elsewhere uses cleaned text; both counts are kept distinct on
//! purpose (see the report type's docs).

/// Assumed reading speed for the reading-time estimate.
pub const WORDS_PER_MINUTE: u64 = 200;

/// Readability returned when the text has no sentences or no words.
pub const READABILITY_FALLBACK: f32 = 50.0;

/// Estimated reading time in whole minutes: `max(1, words / 200)`.
///
/// Word count here is a raw-text whitespace split. Any non-empty input
/// reads for at least one minute.
#[must_use]
pub fn reading_time_min(raw: &str) -> u64 {
    let words = raw.split_whitespace().count() as u64;
    (words / WORDS_PER_MINUTE).max(1)
}

/// Heuristic readability score in `[0, 100]`.
///
/// Sentence count is the number of `.`, `!` and `?` characters in the
/// raw text; word count is a raw whitespace split; character count is
/// the raw text with literal spaces removed. The formula is
/// `100 − (avg_sentence_length + avg_word_length × 10)`, clamped.
///
/// This is a house heuristic, not Flesch-Kincaid or any standard
/// formula, and is implemented literally.
#[must_use]
pub fn readability(raw: &str) -> f32 {
    let sentences = raw.chars().filter(|c| matches!(c, '.' | '!' | '?')).count();
    let words = raw.split_whitespace().count();

    if sentences == 0 || words == 0 {
        return READABILITY_FALLBACK;
    }

    let chars = raw.chars().filter(|&c| c != ' ').count();

    let avg_sentence_len = words as f32 / sentences as f32;
    let avg_word_len = chars as f32 / words as f32;

    (100.0 - (avg_sentence_len + avg_word_len * 10.0)).clamp(0.0, 100.0)
}

/// Reverses cleaned text character by character.
#[must_use]
pub fn reverse(cleaned: &str) -> String {
    cleaned.chars().rev().collect()
}

/// Checks whether cleaned text, spaces removed and lowercased, equals
/// its own reversal. Empty cleaned text reads the same both ways and
/// reports `true`.
#[must_use]
pub fn is_palindrome(cleaned: &str) -> bool {
    let folded: Vec<char> = cleaned
        .chars()
        .filter(|&c| c != ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    folded.iter().eq(folded.iter().rev())
}
