//! Letter multiset for the root word
//!
//! A `LetterPool` answers the one question the gate needs: can a candidate be
//! spelled from the root's letters, using each letter no more often than the
//! root contains it?

use rustc_hash::FxHashMap;

/// Multiset of the characters in a word
///
/// Order is irrelevant: "slow" and "owls" produce equal pools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool from every character of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert_eq!(pool.count('o'), 1);
    /// assert_eq!(pool.len(), 8);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many copies of `letter` the pool holds
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Remove one copy of `letter`
    ///
    /// Returns `false` (leaving the pool untouched) if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&letter);
                true
            }
            None => false,
        }
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Works on a scratch copy and stops at the first letter that runs out.
    /// This is a multiset-subset test, not a subsequence test.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert!(pool.can_spell("worms"));
    /// assert!(!pool.can_spell("ox"));
    /// assert!(!pool.can_spell("mom"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut scratch = self.clone();
        word.chars().all(|ch| scratch.take(ch))
    }
}
