//! Outcome of submitting a candidate word
//!
//! `Submission` is the success side of a submit, `Rejection` the failure side.

use std::fmt;

/// Why a candidate was turned away
///
/// Variants are listed in gate order: when a word breaks several rules,
/// the earliest one here is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The dictionary does not know the word
    NotARealWord,
    /// The word needs letters the root does not have (or not enough of them)
    NotPossible,
    /// The word was already accepted this session
    NotOriginal,
    /// The word is shorter than the minimum length
    TooShort,
    /// The word is the root word itself
    SameAsRoot,
}

impl Rejection {
    /// Short headline suitable for an alert title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NotARealWord => "Not a real word",
            Self::NotPossible => "Incorrect",
            Self::NotOriginal => "Get creative",
            Self::TooShort => "Word is too short",
            Self::SameAsRoot => "Word is same as root word",
        }
    }

    /// Longer hint shown under the title
    ///
    /// `word` is the normalized candidate that was rejected.
    #[must_use]
    pub fn message(self, word: &str) -> String {
        match self {
            Self::NotARealWord => "Enter a correct English word".to_string(),
            Self::NotPossible => "Try a different combination".to_string(),
            Self::NotOriginal => format!("You've entered {word} already"),
            Self::TooShort => "Enter words with at least three letters".to_string(),
            Self::SameAsRoot => "Enter a different word".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl std::error::Error for Rejection {}

/// A submit that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input was blank; nothing happened and nothing should be shown
    Ignored,
    /// The word joined the used list and scored `points`
    Accepted { word: String, points: usize },
}

impl Submission {
    /// Whether the caller should clear its input field
    #[inline]
    #[must_use]
    pub const fn clears_input(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Points earned by this submission
    #[must_use]
    pub const fn points(&self) -> usize {
        match self {
            Self::Ignored => 0,
            Self::Accepted { points, .. } => *points,
        }
    }
}
