//! Word lists for the game
//!
//! Provides embedded root words and dictionary compiled into the binary,
//! plus a loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
