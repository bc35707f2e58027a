//! Session configuration

use crate::core::normalize;

/// Language passed to the dictionary when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Shortest word the gate accepts
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Root word used when no candidate root is available
pub const DEFAULT_FALLBACK_ROOT: &str = "silkworm";

/// Tunables for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Language code handed to the dictionary on every lookup
    pub language: String,
    /// Words shorter than this (in characters) are rejected as too short
    pub min_word_len: usize,
    /// Root word used when the candidate list has nothing usable
    ///
    /// A blank value means [`DEFAULT_FALLBACK_ROOT`].
    pub fallback_root: String,
}

impl SessionConfig {
    /// Default configuration with a different dictionary language
    #[must_use]
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    /// Normalized fallback root, or [`DEFAULT_FALLBACK_ROOT`] if it is blank
    #[must_use]
    pub fn fallback_word(&self) -> String {
        let root = normalize(&self.fallback_root);
        if root.is_empty() {
            DEFAULT_FALLBACK_ROOT.to_string()
        } else {
            root
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            min_word_len: DEFAULT_MIN_WORD_LEN,
            fallback_root: DEFAULT_FALLBACK_ROOT.to_string(),
        }
    }
}
