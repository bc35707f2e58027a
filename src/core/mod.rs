//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O and no randomness.
//! All types here are pure and testable in isolation.

mod letters;
mod verdict;

pub use letters::LetterPool;
pub use verdict::{Rejection, Submission};

/// Normalize raw input the way the gate sees it: trimmed and lowercased
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Length of a word in characters (not bytes)
#[inline]
#[must_use]
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}
