//! Solutions command
//!
//! Lists every word a given root word accepts.

use crate::core::normalize;
use crate::game::RootReport;

/// Find all accepted words for a root
///
/// `limit` caps how many words are kept (longest words first); the score
/// total always covers the full list.
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn find_solutions<S: AsRef<str> + Sync>(
    root: &str,
    dictionary_words: &[S],
    min_len: usize,
    limit: Option<usize>,
) -> Result<RootReport, String> {
    if normalize(root).is_empty() {
        return Err("Root word must not be empty".to_string());
    }

    let mut report = RootReport::new(root, dictionary_words, min_len);
    if let Some(limit) = limit {
        report.words.truncate(limit);
    }

    tracing::info!(
        root = %report.root,
        shown = report.words.len(),
        max_score = report.max_score,
        "solutions computed"
    );

    Ok(report)
}
