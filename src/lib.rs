//! Word Scramble
//!
//! An anagram word game: spell as many words as you can from the letters of a
//! randomly chosen root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Rejection, Submission};
//! use word_scramble::game::{GameSession, SessionConfig, WordListDictionary};
//!
//! let dictionary = WordListDictionary::new("en", ["silk", "worm", "ox"]);
//! let mut session = GameSession::with_root("silkworm", SessionConfig::default());
//!
//! assert!(matches!(session.submit("silk", &dictionary), Ok(Submission::Accepted { .. })));
//! assert_eq!(session.submit("ox", &dictionary), Err(Rejection::NotPossible));
//! assert_eq!(session.score(), 4);
//! ```

// Core domain types
pub mod core;

// Game session and rules
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
