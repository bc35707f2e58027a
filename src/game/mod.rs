//! Game engine
//!
//! Session state, the rule gate and the dictionary seam it depends on.

pub mod config;
pub mod dictionary;
mod session;
pub mod solutions;

pub use config::SessionConfig;
pub use dictionary::{Dictionary, WordListDictionary};
pub use session::GameSession;
pub use solutions::{RootReport, max_score, possible_words};
