//! Dictionary oracle
//!
//! Defines the Dictionary trait and an in-memory word list implementation.

use rustc_hash::FxHashSet;

/// Answers "is this a real word in this language?"
///
/// Lookups are case-insensitive. Any `Fn(&str, &str) -> bool` closure is a
/// dictionary too, which keeps fakes in tests to a single line.
pub trait Dictionary {
    /// Check whether `word` is a real word in `language`
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Dictionary backed by a fixed set of words for one language
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from a word list
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::new("en", ["Silk", "worm", ""]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.is_real_word("SILK", "en"));
    /// assert!(!dictionary.is_real_word("silk", "fr"));
    /// ```
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// Language code this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Check membership regardless of language
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Iterate over all known words (unordered)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.contains(word)
    }
}
