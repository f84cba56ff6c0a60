//! Streaming Tokenizer Module
//!
//! Splits cleaned text into individual word tokens. Second stage in the
//! pipeline: it takes the cleaner's output and breaks it into countable
//! units for frequency tables and the word-length histogram.
//!
//! ## Key Features
//!
//! - **Zero Allocation**: Tokens are slices of the input, not new strings
//! - **Streaming**: Uses a callback to emit tokens, no intermediate
//!   collection
//! - **Fast**: Simple byte-scan for ASCII space (0x20) splitting
//!
//! ## The Input Contract
//!
//! The tokenizer expects **cleaned** input ([`TextCleaner`] output):
//!
//! - ASCII alphanumerics and spaces only
//! - No leading or trailing whitespace
//! - No consecutive spaces between words
//!
//! Violations panic in debug builds with a helpful message.
//!
//! [`TextCleaner`]: crate::analyzer::normalizer::TextCleaner

use memchr::memchr_iter;

/// Streaming tokenizer - splits cleaned text into word tokens.
///
/// Emits each word as a `&str` slice of the original input together
/// with its position, via callback. A single forward scan over the
/// bytes looking for ASCII space; each non-space run becomes a token.
///
/// Tokens keep the original casing; callers that need lowercase (the
/// frequency filter does) fold per token.
///
/// ## Example
///
/// ```
/// use lexis_core::analyzer::tokenizer::Tokenizer;
///
/// let mut words = Vec::new();
/// Tokenizer::new().tokenize("Hello World 123", |text, _pos| {
///     words.push(text.to_string());
/// });
///
/// assert_eq!(words, ["Hello", "World", "123"]);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes cleaned input and emits `(text, position)`.
    ///
    /// Position is `u32`. After emitting a token at position
    /// `u32::MAX`, further emissions stop (overflow protection).
    #[inline]
    pub fn tokenize<'c, F>(&self, cleaned: &'c str, mut emit: F)
    where
        F: FnMut(&'c str, u32),
    {
        let bytes = cleaned.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace — cleaner contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace — cleaner contract violated"
        );

        debug_assert!(
            cleaned.chars().all(|c| c.is_ascii_alphanumeric() || c == ' '),
            "tokenizer: non-alphanumeric content — cleaner contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // Cleaned text is ASCII-only, so every byte index is a
                // char boundary and plain slicing cannot panic.
                emit(&cleaned[start..i], pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            emit(&cleaned[start..], pos);
        }
    }

    /// Counts tokens without emitting them.
    #[inline]
    #[must_use]
    pub fn count(&self, cleaned: &str) -> usize {
        let mut n = 0usize;
        self.tokenize(cleaned, |_, _| n += 1);
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        Tokenizer::new().tokenize(input, |text, pos| {
            out.push((text, pos));
        });
        out
    }

    #[test]
    fn single_word() {
        let out = collect("hello");
        assert_eq!(out, vec![("hello", 0)]);
    }

    #[test]
    fn two_words() {
        let out = collect("hello world");
        assert_eq!(out, vec![("hello", 0), ("world", 1)]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox");
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn single_char_token() {
        let out = collect("a");
        assert_eq!(out, vec![("a", 0)]);
    }

    #[test]
    fn casing_preserved() {
        let out = collect("Hello World");
        assert_eq!(out[0].0, "Hello");
        assert_eq!(out[1].0, "World");
    }

    #[test]
    fn digits_are_tokens() {
        let out = collect("Hello World 123");
        assert_eq!(out[2].0, "123");
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn emit_order_is_left_to_right() {
        let words = ["one", "two", "three", "four"];
        let input = words.join(" ");
        let mut i = 0usize;

        Tokenizer::new().tokenize(&input, |text, pos| {
            assert_eq!(text, words[i]);
            assert_eq!(pos, i as u32);
            i += 1;
        });

        assert_eq!(i, words.len());
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new();

        assert_eq!(t.count("hello world"), 2);
        assert_eq!(t.count("one two three"), 3);
    }

    #[test]
    fn count_matches_emissions() {
        let t = Tokenizer::new();
        let input = "a bb ccc dddd";
        assert_eq!(t.count(input), collect(input).len());
    }

    #[test]
    fn composes_with_length_histogram() {
        let mut hist = std::collections::BTreeMap::new();
        Tokenizer::new().tokenize("a bb cc ddd", |text, _| {
            *hist.entry(text.len()).or_insert(0u32) += 1;
        });

        assert_eq!(hist.get(&1), Some(&1));
        assert_eq!(hist.get(&2), Some(&2));
        assert_eq!(hist.get(&3), Some(&1));
    }
}
