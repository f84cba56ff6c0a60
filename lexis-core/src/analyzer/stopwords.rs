//! Stopword list for frequency filtering.
//!
//! A closed list of common English function words excluded from the
//! word-frequency table. The list is fixed on purpose: reports must be
//! reproducible, so no runtime additions. The word-length histogram is
//! computed *before* this filter and is unaffected by it.

/// Common English function words excluded from frequency analysis.
pub const STOPWORDS: [&str; 18] = [
    "the", "is", "and", "a", "an", "to", "in", "of", "for", "on", "with", "as",
    "by", "it", "at", "be", "this", "that",
];

/// Minimum token length admitted to the frequency table. Tokens of two
/// characters or fewer are discarded alongside stopwords.
pub const MIN_TOKEN_LEN: usize = 3;

/// Returns `true` if the (lowercased) token is a stopword.
///
/// Linear scan over 18 entries; at this size it beats hashing and needs
/// no allocation or one-time setup.
#[inline]
#[must_use]
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Returns `true` if a lowercased token should enter the frequency
/// table: not a stopword and at least [`MIN_TOKEN_LEN`] characters.
#[inline]
#[must_use]
pub fn admits(token: &str) -> bool {
    token.len() >= MIN_TOKEN_LEN && !is_stopword(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_stopwords() {
        for w in ["the", "is", "and", "on", "that"] {
            assert!(is_stopword(w), "{} should be a stopword", w);
        }
    }

    #[test]
    fn content_words_pass() {
        for w in ["cat", "analysis", "panama"] {
            assert!(!is_stopword(w), "{} should not be a stopword", w);
        }
    }

    #[test]
    fn list_is_lowercase_and_deduplicated() {
        for w in STOPWORDS {
            assert_eq!(w, w.to_lowercase());
        }
        let mut sorted: Vec<_> = STOPWORDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), STOPWORDS.len());
    }

    #[test]
    fn short_tokens_rejected() {
        assert!(!admits("ab"));
        assert!(!admits("x"));
        assert!(!admits(""));
    }

    #[test]
    fn three_letter_content_word_admitted() {
        assert!(admits("ran"));
        assert!(admits("cat"));
    }

    #[test]
    fn long_stopword_still_rejected() {
        // "with" and "this" pass the length gate but not the list.
        assert!(!admits("with"));
        assert!(!admits("this"));
    }
}
