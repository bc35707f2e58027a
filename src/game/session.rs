//! Game session: root word, accepted words and score
//!
//! The session owns all mutable game state. It is changed only by `start`
//! (new root, cleared progress) and by a `submit` that passes every rule.

use super::config::SessionConfig;
use super::dictionary::Dictionary;
use crate::core::{LetterPool, Rejection, Submission, normalize, word_len};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

/// One play-through of the game
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    root_word: String,
    letters: LetterPool,
    used_words: Vec<String>,
    score: usize,
}

impl GameSession {
    /// Create a session on the configured fallback root
    ///
    /// Call [`start`](Self::start) to draw a random root.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let root = config.fallback_word();
        Self::with_root(&root, config)
    }

    /// Create a session on a specific root word
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::{GameSession, SessionConfig};
    ///
    /// let session = GameSession::with_root("SilkWorm", SessionConfig::default());
    /// assert_eq!(session.root_word(), "silkworm");
    /// assert_eq!(session.score(), 0);
    /// ```
    #[must_use]
    pub fn with_root(root: &str, config: SessionConfig) -> Self {
        let root_word = normalize(root);
        Self {
            letters: LetterPool::new(&root_word),
            root_word,
            config,
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Begin a new game on a randomly chosen root word
    ///
    /// Candidates are normalized and blank entries dropped before the draw.
    /// With nothing left to draw from, the configured fallback root is used.
    /// Accepted words and score are reset either way.
    ///
    /// Returns the new root word.
    pub fn start<I, S, R>(&mut self, candidates: I, rng: &mut R) -> &str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let candidates: Vec<String> = candidates
            .into_iter()
            .map(|c| normalize(c.as_ref()))
            .filter(|c| !c.is_empty())
            .collect();

        let root_word = if let Some(chosen) = candidates.choose(rng) {
            chosen.clone()
        } else {
            let fallback = self.config.fallback_word();
            warn!(fallback = %fallback, "no candidate root words, using fallback");
            fallback
        };

        debug!(root = %root_word, pool = candidates.len(), "new game started");

        self.letters = LetterPool::new(&root_word);
        self.root_word = root_word;
        self.used_words.clear();
        self.score = 0;

        &self.root_word
    }

    /// Submit a candidate word
    ///
    /// The input is trimmed and lowercased, then checked against the rules in
    /// order (see [`check`](Self::check)). Blank input is ignored without an
    /// error. The session only changes when every rule passes: the word goes
    /// to the front of the used list and its length is added to the score.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] the word runs into. State is untouched.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Rejection, Submission};
    /// use word_scramble::game::{GameSession, SessionConfig, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::new("en", ["silk", "ox"]);
    /// let mut session = GameSession::with_root("silkworm", SessionConfig::default());
    ///
    /// assert!(matches!(
    ///     session.submit(" Silk ", &dictionary),
    ///     Ok(Submission::Accepted { points: 4, .. })
    /// ));
    /// assert_eq!(session.submit("ox", &dictionary), Err(Rejection::NotPossible));
    /// assert_eq!(session.submit("   ", &dictionary), Ok(Submission::Ignored));
    /// assert_eq!(session.score(), 4);
    /// ```
    pub fn submit<D>(&mut self, input: &str, dictionary: &D) -> Result<Submission, Rejection>
    where
        D: Dictionary + ?Sized,
    {
        let word = normalize(input);
        if word.is_empty() {
            return Ok(Submission::Ignored);
        }

        if let Err(rejection) = self.check(&word, dictionary) {
            debug!(word = %word, root = %self.root_word, ?rejection, "word rejected");
            return Err(rejection);
        }

        let points = word_len(&word);
        self.used_words.insert(0, word.clone());
        self.score += points;

        debug!(word = %word, points, score = self.score, "word accepted");

        Ok(Submission::Accepted { word, points })
    }

    /// Run the rule gate on an already-normalized, non-empty word
    ///
    /// Rules, first failure wins:
    /// 1. known to the dictionary
    /// 2. spelled from the root's letters
    /// 3. not already used
    /// 4. at least `min_word_len` characters
    /// 5. not the root word itself
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] for the first rule the word breaks.
    pub fn check<D>(&self, word: &str, dictionary: &D) -> Result<(), Rejection>
    where
        D: Dictionary + ?Sized,
    {
        if !dictionary.is_real_word(word, &self.config.language) {
            return Err(Rejection::NotARealWord);
        }

        if !self.letters.can_spell(word) {
            return Err(Rejection::NotPossible);
        }

        if !self.is_original(word) {
            return Err(Rejection::NotOriginal);
        }

        if word_len(word) < self.config.min_word_len {
            return Err(Rejection::TooShort);
        }

        if word == self.root_word {
            return Err(Rejection::SameAsRoot);
        }

        Ok(())
    }

    /// Whether `word` has not been accepted yet this session
    #[must_use]
    pub fn is_original(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        !self.used_words.iter().any(|used| *used == word)
    }

    /// Current root word (lowercase)
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Sum of the lengths of all accepted words
    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WordListDictionary;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn any_word(_: &str, _: &str) -> bool {
        true
    }

    fn silkworm() -> GameSession {
        GameSession::with_root("silkworm", SessionConfig::default())
    }

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new(
            "en",
            [
                "silk", "worm", "milk", "owl", "slow", "to", "ox", "silkworm", "i", "worms",
            ],
        )
    }

    #[test]
    fn accepts_silk() {
        let mut session = silkworm();
        let result = session.submit("silk", &dictionary());

        assert_eq!(
            result,
            Ok(Submission::Accepted {
                word: "silk".to_string(),
                points: 4
            })
        );
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words(), ["silk"]);
    }

    #[test]
    fn same_word_twice_is_not_original() {
        let mut session = silkworm();
        let dictionary = dictionary();

        assert!(session.submit("silk", &dictionary).is_ok());
        assert_eq!(
            session.submit("silk", &dictionary),
            Err(Rejection::NotOriginal)
        );
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words().len(), 1);
    }

    #[test]
    fn duplicate_check_ignores_case() {
        let mut session = silkworm();
        let dictionary = dictionary();

        assert!(session.submit("silk", &dictionary).is_ok());
        assert_eq!(
            session.submit("SILK", &dictionary),
            Err(Rejection::NotOriginal)
        );
        assert!(!session.is_original("Silk"));
    }

    #[test]
    fn missing_letter_is_not_possible() {
        let mut session = silkworm();
        assert_eq!(
            session.submit("ox", &dictionary()),
            Err(Rejection::NotPossible)
        );
    }

    #[test]
    fn root_word_is_rejected() {
        let mut session = silkworm();
        assert_eq!(
            session.submit("silkworm", &dictionary()),
            Err(Rejection::SameAsRoot)
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn two_letter_word_is_too_short() {
        let mut session = GameSession::with_root("silkworm", SessionConfig::default());
        // silkworm has no 't'
        assert_eq!(
            session.submit("to", &dictionary()),
            Err(Rejection::NotPossible)
        );

        let mut session = GameSession::with_root("tomorrow", SessionConfig::default());
        assert_eq!(
            session.submit("to", &dictionary()),
            Err(Rejection::TooShort)
        );
    }

    #[test]
    fn short_word_from_root_letters_is_too_short() {
        let mut session = silkworm();
        let dictionary = |word: &str, _: &str| word == "so";
        assert_eq!(session.submit("so", &dictionary), Err(Rejection::TooShort));
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = silkworm();
        let dictionary = dictionary();

        for input in ["", "   ", "\n", "\t \n"] {
            assert_eq!(session.submit(input, &dictionary), Ok(Submission::Ignored));
        }
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let mut session = silkworm();
        let result = session.submit("  WoRm\n", &dictionary());
        assert_eq!(
            result,
            Ok(Submission::Accepted {
                word: "worm".to_string(),
                points: 4
            })
        );
        assert_eq!(session.used_words(), ["worm"]);
    }

    #[test]
    fn unknown_short_word_reports_not_a_real_word() {
        let mut session = silkworm();
        // "k" is from the root and too short, but the dictionary check comes first
        assert_eq!(
            session.submit("k", &dictionary()),
            Err(Rejection::NotARealWord)
        );
    }

    #[test]
    fn gate_order_prefers_not_possible_over_too_short() {
        let mut session = silkworm();
        assert_eq!(
            session.submit("ox", &any_word),
            Err(Rejection::NotPossible)
        );
    }

    #[test]
    fn gate_order_prefers_not_original_over_too_short() {
        let config = SessionConfig {
            min_word_len: 2,
            ..SessionConfig::default()
        };
        let mut session = GameSession::with_root("silkworm", config);
        assert!(session.submit("so", &any_word).is_ok());

        session.config.min_word_len = 3;
        assert_eq!(session.submit("so", &any_word), Err(Rejection::NotOriginal));
    }

    #[test]
    fn rejection_is_idempotent() {
        let mut session = silkworm();
        let dictionary = dictionary();
        session.submit("milk", &dictionary).unwrap();

        for input in ["xyz", "ox", "milk", "owl!", "silkworm"] {
            let first = session.submit(input, &dictionary);
            let second = session.submit(input, &dictionary);
            assert!(first.is_err());
            assert_eq!(first, second);
            assert_eq!(session.score(), 4);
            assert_eq!(session.used_words(), ["milk"]);
        }
    }

    #[test]
    fn newest_word_comes_first() {
        let mut session = silkworm();
        let dictionary = dictionary();
        for word in ["silk", "worm", "owl", "slow"] {
            session.submit(word, &dictionary).unwrap();
        }
        assert_eq!(session.used_words(), ["slow", "owl", "worm", "silk"]);
        assert_eq!(session.score(), 4 + 4 + 3 + 4);
    }

    #[test]
    fn dictionary_sees_configured_language() {
        let mut session = GameSession::with_root("silkworm", SessionConfig::with_language("fr"));
        let english_only = dictionary();
        assert_eq!(
            session.submit("silk", &english_only),
            Err(Rejection::NotARealWord)
        );

        let french = |_: &str, language: &str| language == "fr";
        assert!(session.submit("silk", &french).is_ok());
    }

    #[test]
    fn start_resets_progress() {
        let mut session = silkworm();
        session.submit("silk", &dictionary()).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let root = session.start(["Absolute"], &mut rng).to_string();

        assert_eq!(root, "absolute");
        assert_eq!(session.root_word(), "absolute");
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
        assert_eq!(session.check("lot", &any_word), Ok(()));
        assert_eq!(session.check("silk", &any_word), Err(Rejection::NotPossible));
    }

    #[test]
    fn blank_fallback_root_uses_default() {
        let config = SessionConfig {
            fallback_root: "   ".to_string(),
            ..SessionConfig::default()
        };
        let mut session = GameSession::new(config);
        assert_eq!(session.root_word(), "silkworm");

        let mut rng = StdRng::seed_from_u64(3);
        let empty: [&str; 0] = [];
        assert_eq!(session.start(empty, &mut rng), "silkworm");
        assert!(session.submit("silk", &dictionary()).is_ok());
    }

    #[test]
    fn start_without_candidates_uses_fallback() {
        let mut session = GameSession::with_root("absolute", SessionConfig::default());
        let mut rng = StdRng::seed_from_u64(1);

        let empty: [&str; 0] = [];
        assert_eq!(session.start(empty, &mut rng), "silkworm");
        assert_eq!(session.start(["", "  ", "\n"], &mut rng), "silkworm");
    }

    #[test]
    fn start_with_custom_fallback() {
        let config = SessionConfig {
            fallback_root: "Notebook".to_string(),
            ..SessionConfig::default()
        };
        let mut session = GameSession::new(config);
        assert_eq!(session.root_word(), "notebook");

        let mut rng = StdRng::seed_from_u64(1);
        let empty: Vec<String> = Vec::new();
        assert_eq!(session.start(empty, &mut rng), "notebook");
    }

    #[test]
    fn seeded_start_is_deterministic() {
        let candidates = ["silkworm", "absolute", "carnival", "dinosaur", "elephant"];

        let mut first = GameSession::default();
        let mut second = GameSession::default();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            let a = first.start(candidates, &mut rng_a).to_string();
            let b = second.start(candidates, &mut rng_b).to_string();
            assert_eq!(a, b);
            assert!(candidates.contains(&a.as_str()));
        }
    }

    #[test]
    fn start_draws_every_candidate_eventually() {
        let candidates = ["silkworm", "absolute", "carnival"];
        let mut session = GameSession::default();
        let mut rng = StdRng::seed_from_u64(3);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(session.start(candidates, &mut rng).to_string());
        }
        assert_eq!(seen.len(), candidates.len());
    }

    #[test]
    fn check_does_not_mutate() {
        let session = silkworm();
        assert_eq!(session.check("silk", &dictionary()), Ok(()));
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_input_sequence(
            inputs in prop::collection::vec("[silkwormxtSILK ]{0,9}", 0..40)
        ) {
            let mut session = silkworm();

            for input in &inputs {
                let score_before = session.score();
                let used_before = session.used_words().len();

                match session.submit(input, &any_word) {
                    Ok(Submission::Accepted { word, points }) => {
                        prop_assert_eq!(points, word_len(&word));
                        prop_assert_eq!(session.score(), score_before + points);
                        prop_assert_eq!(&session.used_words()[0], &word);
                    }
                    Ok(Submission::Ignored) | Err(_) => {
                        prop_assert_eq!(session.score(), score_before);
                        prop_assert_eq!(session.used_words().len(), used_before);
                    }
                }

                let root = LetterPool::new(session.root_word());
                let mut seen = std::collections::HashSet::new();
                for used in session.used_words() {
                    prop_assert!(seen.insert(used.to_lowercase()));
                    prop_assert!(root.can_spell(used));
                    prop_assert_ne!(used.as_str(), session.root_word());
                }

                let total: usize = session.used_words().iter().map(|w| word_len(w)).sum();
                prop_assert_eq!(session.score(), total);
            }
        }

        #[test]
        fn rejected_words_stay_rejected(input in "[a-z]{1,10}") {
            let mut session = silkworm();
            let dictionary = dictionary();

            let first = session.submit(&input, &dictionary);
            if first.is_err() {
                prop_assert_eq!(session.submit(&input, &dictionary), first);
                prop_assert_eq!(session.score(), 0);
            }
        }
    }
}
