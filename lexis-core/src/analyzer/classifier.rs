//! Character classification module.
//!
//! Tallies the character classes of cleaned text (vowels, consonants,
//! digits, spaces) and the case counts of raw text. Special characters
//! are *not* classified here: they are defined as the char-count
//! difference between raw and cleaned text, computed by the pipeline.

use lexis_types::CharClassCounts;

/// Returns `true` for case-insensitive members of `{a, e, i, o, u}`.
#[inline(always)]
#[must_use]
pub const fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U'
    )
}

/// Classifies every character of cleaned text into one of four classes.
///
/// Relies on the cleaner's contract: the input holds only ASCII
/// alphanumerics and single spaces, so the four classes partition it
/// exactly (`counts.total() == cleaned.chars().count()`).
#[must_use]
pub fn classify(cleaned: &str) -> CharClassCounts {
    let mut counts = CharClassCounts::default();

    for c in cleaned.chars() {
        if is_vowel(c) {
            counts.vowels += 1;
        } else if c.is_ascii_alphabetic() {
            counts.consonants += 1;
        } else if c.is_ascii_digit() {
            counts.digits += 1;
        } else if c == ' ' {
            counts.spaces += 1;
        }
    }

    counts
}

/// Counts uppercase and lowercase characters of the **raw** text.
///
/// Case information survives cleaning, but the observed behavior counts
/// case on the raw input, so characters that cleaning would strip
/// (accented letters, for instance) still contribute here.
#[must_use]
pub fn case_counts(raw: &str) -> (usize, usize) {
    let mut upper = 0usize;
    let mut lower = 0usize;

    for c in raw.chars() {
        if c.is_uppercase() {
            upper += 1;
        } else if c.is_lowercase() {
            lower += 1;
        }
    }

    (upper, lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::normalizer::TextCleaner;

    #[test]
    fn vowels_case_insensitive() {
        for c in ['a', 'E', 'i', 'O', 'u'] {
            assert!(is_vowel(c), "{} should be a vowel", c);
        }
        for c in ['b', 'Z', '1', ' ', 'y'] {
            assert!(!is_vowel(c), "{} should not be a vowel", c);
        }
    }

    #[test]
    fn basic_classification() {
        let counts = classify("Hello World 123");
        assert_eq!(counts.vowels, 3); // e, o, o
        assert_eq!(counts.consonants, 7); // H, l, l, W, r, l, d
        assert_eq!(counts.digits, 3);
        assert_eq!(counts.spaces, 2);
    }

    #[test]
    fn empty_input() {
        assert_eq!(classify(""), CharClassCounts::default());
    }

    #[test]
    fn classes_partition_cleaned_text() {
        let cleaner = TextCleaner::new();
        let samples = [
            "The quick brown fox jumps over the lazy dog!",
            "Numbers 42 and 1337, with punctuation...",
            "   messy \t input \n here   ",
        ];

        for raw in samples {
            let cleaned = cleaner.clean(raw);
            let counts = classify(&cleaned);
            assert_eq!(
                counts.total(),
                cleaned.chars().count(),
                "partition failed for {:?}",
                raw
            );
        }
    }

    #[test]
    fn case_counts_on_raw() {
        let (upper, lower) = case_counts("Hello World");
        assert_eq!(upper, 2);
        assert_eq!(lower, 8);
    }

    #[test]
    fn case_counts_include_stripped_chars() {
        // É is stripped by cleaning but still counts as uppercase here.
        let (upper, lower) = case_counts("École");
        assert_eq!(upper, 1);
        assert_eq!(lower, 4);
    }

    #[test]
    fn case_counts_ignore_digits_and_punctuation() {
        let (upper, lower) = case_counts("123 !?");
        assert_eq!(upper, 0);
        assert_eq!(lower, 0);
    }
}
