//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Entries are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split newline-delimited text into normalized words
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| normalize(s))
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_text_skips_blank_lines() {
        let words = words_from_text("silkworm\n\n  Absolute \r\n\ncarnival\n");

        assert_eq!(words, vec!["silkworm", "absolute", "carnival"]);
    }

    #[test]
    fn words_from_text_empty() {
        assert!(words_from_text("").is_empty());
        assert!(words_from_text("\n\n").is_empty());
    }

    #[test]
    fn words_from_slice_normalizes() {
        let input = &["Silk", " worm", ""];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silk", "worm"]);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_embedded_roots() {
        use crate::wordlists::ROOT_WORDS;

        let words = words_from_slice(ROOT_WORDS);
        assert_eq!(words.len(), ROOT_WORDS.len());
    }
}
