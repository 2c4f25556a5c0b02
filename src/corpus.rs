use crate::error::{PfResult, PhraseForgeError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the whole corpus into memory.
///
/// A missing file is reported as [`PhraseForgeError::InputNotFound`] so callers
/// can stop cleanly; every other failure (permissions, invalid UTF-8) is an
/// ordinary I/O error.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> PfResult<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PhraseForgeError::InputNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Lowercases the text, deletes everything that is not an ASCII letter or
/// whitespace, then collapses whitespace runs into single spaces.
///
/// The result contains only `a..=z` and single interior spaces.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    let letters: String = lowered
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || is_separator(c))
        .collect();

    tokenize(&letters).join(" ")
}

/// Splits normalized text into words. Empty input yields no tokens.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized
        .split(is_separator)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which `char::is_whitespace` leaves out.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// All contiguous `n`-word windows, joined by a single space.
pub fn ngrams(tokens: &[&str], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }
    tokens.windows(n).map(|w| w.join(" ")).collect()
}

/// Every bigram in token order, followed by every trigram in token order.
///
/// Phrases are not deduplicated; repeats carry the frequency signal.
pub fn generate_phrases(tokens: &[&str]) -> Vec<String> {
    let mut phrases = ngrams(tokens, 2);
    phrases.extend(ngrams(tokens, 3));
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_digits() {
        assert_eq!(normalize("Hello, World! 42 times."), "hello world times");
    }

    #[test]
    fn test_normalize_deletes_rather_than_splits() {
        // Apostrophes and hyphens vanish without leaving a gap.
        assert_eq!(normalize("don't well-known"), "dont wellknown");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  a\t\tb \n\n c  "), "a b c");
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        assert_eq!(normalize("Café naïve"), "caf nave");
    }

    #[test]
    fn test_information_separators_split_words() {
        assert_eq!(tokenize("a\u{1c}b\u{1f}c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ngrams_zero_width() {
        assert!(ngrams(&["a", "b"], 0).is_empty());
    }
}
