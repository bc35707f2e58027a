//! Every word a root would accept
//!
//! Scans a dictionary word list for words a fresh session on `root` would
//! accept. Used for hints and for the offline reports.

use crate::core::{LetterPool, normalize, word_len};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Summary of what a single root word allows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootReport {
    pub root: String,
    pub words: Vec<String>,
    pub max_score: usize,
}

impl RootReport {
    /// Build a report for `root` against a dictionary word list
    #[must_use]
    pub fn new<S: AsRef<str> + Sync>(root: &str, dictionary_words: &[S], min_len: usize) -> Self {
        let words = possible_words(root, dictionary_words, min_len);
        let max_score = max_score(&words);
        Self {
            root: normalize(root),
            words,
            max_score,
        }
    }

    /// Number of distinct words the root allows
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }
}

/// Find all distinct words from `dictionary_words` a fresh session on `root` accepts
///
/// A word qualifies when it is spelled from the root's letters, has at least
/// `min_len` characters and is not the root itself. Results are sorted longest
/// first, then alphabetically.
///
/// # Examples
/// ```
/// use word_scramble::game::possible_words;
///
/// let words = possible_words("silkworm", &["silk", "ox", "owl", "so", "silkworm", "worms"], 3);
/// assert_eq!(words, vec!["worms", "silk", "owl"]);
/// ```
#[must_use]
pub fn possible_words<S: AsRef<str> + Sync>(
    root: &str,
    dictionary_words: &[S],
    min_len: usize,
) -> Vec<String> {
    let root = normalize(root);
    let pool = LetterPool::new(&root);

    let found: FxHashSet<String> = dictionary_words
        .par_iter()
        .map(|w| normalize(w.as_ref()))
        .filter(|w| word_len(w) >= min_len.max(1) && *w != root && pool.can_spell(w))
        .collect();

    let mut words: Vec<String> = found.into_iter().collect();
    words.sort_by(|a, b| word_len(b).cmp(&word_len(a)).then_with(|| a.cmp(b)));
    words
}

/// Highest score reachable from a list of distinct accepted words
#[must_use]
pub fn max_score(words: &[String]) -> usize {
    words.iter().map(|w| word_len(w)).sum()
}
