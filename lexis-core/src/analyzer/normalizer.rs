//! Text cleaning module.
//!
//! First stage of the pipeline: turns arbitrary raw text into *cleaned
//! text*, the canonical form every downstream counter operates on.
//!
//! ## What It Does
//!
//! - Strips every character that is not an ASCII alphanumeric or
//!   whitespace (punctuation, symbols, emoji, non-Latin letters)
//! - Collapses runs of whitespace (any Unicode whitespace) into a
//!   single ASCII space
//! - Trims leading and trailing whitespace
//!
//! Case is deliberately **not** touched: uppercase/lowercase tallies and
//! the cleaned-text echo in the report need the original casing.
//!
//! ## The Output Contract
//!
//! Cleaned text contains only `[A-Za-z0-9]` and single interior spaces,
//! with no leading or trailing space. The tokenizer relies on this and
//! checks it with debug assertions.
//!
//! Cleaning is total (never fails; empty in, empty out) and idempotent:
//! cleaning already-cleaned text is a no-op.

/// Cleans raw text into the pipeline's canonical form.
///
/// Stateless; one instance can be shared and reused freely. Offers a
/// buffer-reusing form ([`clean_into`](TextCleaner::clean_into)) for
/// callers that analyze many texts, and an allocating convenience form
/// ([`clean`](TextCleaner::clean)).
///
/// # Examples
///
/// ```
/// use lexis_core::analyzer::normalizer::TextCleaner;
///
/// let cleaner = TextCleaner::default();
/// assert_eq!(cleaner.clean("Hello, World! 123"), "Hello World 123");
/// assert_eq!(cleaner.clean("  spaced \t out  "), "spaced out");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCleaner;

impl TextCleaner {
    /// Creates a new cleaner.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Cleans `input` into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity when
    /// sufficient. Output length never exceeds input length.
    pub fn clean_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        // `pending_space` records that a separator was seen since the
        // last kept character; it is only materialized when another
        // alphanumeric follows, which trims both ends for free.
        let mut pending_space = false;
        let mut started = false;

        for ch in input.chars() {
            if ch.is_ascii_alphanumeric() {
                if pending_space && started {
                    out.push(' ');
                }
                out.push(ch);
                started = true;
                pending_space = false;
            } else if ch.is_whitespace() {
                pending_space = true;
            }
            // Anything else is a special character: stripped.
        }
    }

    /// Cleans `input` and returns a new String.
    #[inline]
    #[must_use]
    pub fn clean(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.clean_into(input, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(input: &str) -> String {
        TextCleaner::new().clean(input)
    }

    #[test]
    fn alnum_and_spaces_pass_through() {
        assert_eq!(clean("Hello World 123"), "Hello World 123");
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(clean("MiXeD CaSe"), "MiXeD CaSe");
    }

    #[test]
    fn punctuation_stripped() {
        assert_eq!(clean("Hello, World!"), "Hello World");
        assert_eq!(clean("foo-bar_baz"), "foobarbaz");
        assert_eq!(clean("it's"), "its");
    }

    #[test]
    fn punctuation_between_letters_leaves_no_space() {
        assert_eq!(clean("foo!bar"), "foobar");
    }

    #[test]
    fn punctuation_between_spaces_collapses() {
        assert_eq!(clean("foo ! bar"), "foo bar");
    }

    #[test]
    fn whitespace_collapse() {
        assert_eq!(clean("hello   world"), "hello world");
        assert_eq!(clean("hello\t\nworld"), "hello world");
        assert_eq!(clean("hello \r\n world"), "hello world");
    }

    #[test]
    fn leading_and_trailing_whitespace_removed() {
        assert_eq!(clean("   hello   "), "hello");
        assert_eq!(clean("\n\thello world\t\n"), "hello world");
    }

    #[test]
    fn only_whitespace_yields_empty() {
        assert_eq!(clean("   "), "");
        assert_eq!(clean("\n\t\r"), "");
    }

    #[test]
    fn only_punctuation_yields_empty() {
        assert_eq!(clean("!?.,;:"), "");
        assert_eq!(clean("... --- ..."), "");
    }

    #[test]
    fn empty_input() {
        assert_eq!(clean(""), "");
    }

    #[test]
    fn non_ascii_letters_stripped() {
        assert_eq!(clean("café"), "caf");
        assert_eq!(clean("привет hello"), "hello");
        assert_eq!(clean("你好 world"), "world");
    }

    #[test]
    fn emoji_stripped() {
        assert_eq!(clean("Hello 🌍 World"), "Hello World");
    }

    #[test]
    fn unicode_whitespace_collapses_to_ascii_space() {
        // Non-breaking space and ideographic space are separators too.
        assert_eq!(clean("a\u{00A0}b"), "a b");
        assert_eq!(clean("a\u{3000}b"), "a b");
    }

    #[test]
    fn digits_kept() {
        assert_eq!(clean("Hello World 123!"), "Hello World 123");
    }

    #[test]
    fn no_double_spaces() {
        let out = clean("a  b ! c\n\nd");
        assert!(!out.contains("  "));
    }

    #[test]
    fn idempotent() {
        let cleaner = TextCleaner::new();
        let samples = [
            "Hello, World! 123",
            "  lots\t of \n mess  ",
            "A man a plan a canal Panama",
            "!@#$%^",
            "",
        ];

        for s in samples {
            let once = cleaner.clean(s);
            let twice = cleaner.clean(&once);
            assert_eq!(once, twice, "clean not idempotent for {:?}", s);
        }
    }

    #[test]
    fn output_not_longer_than_input() {
        let inputs = ["Hello, World!", "  a  ", "café ☕", "x"];
        for input in inputs {
            assert!(clean(input).len() <= input.len());
        }
    }

    #[test]
    fn clean_into_reuses_capacity() {
        let cleaner = TextCleaner::new();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        cleaner.clean_into("Hello!", &mut buf);
        assert_eq!(buf, "Hello");
        assert_eq!(buf.capacity(), cap);

        cleaner.clean_into("World?", &mut buf);
        assert_eq!(buf, "World");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn already_clean_example() {
        assert_eq!(
            clean("A man a plan a canal Panama"),
            "A man a plan a canal Panama"
        );
    }

    #[test]
    fn very_long_input() {
        let input = "ab! ".repeat(10_000);
        let out = clean(&input);
        assert_eq!(out.len(), 3 * 10_000 - 1);
        assert!(!out.contains('!'));
    }
}
