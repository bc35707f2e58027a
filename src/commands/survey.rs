//! Survey all root words
//!
//! Runs the solution finder over every root word and summarizes how rich each
//! one is.

use crate::game::RootReport;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Statistics from surveying a set of root words
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub reports: Vec<RootReport>,
    pub total_time: Duration,
    pub average_words: f64,
    pub average_max_score: f64,
    pub richest: Option<(String, usize)>,
    pub poorest: Option<(String, usize)>,
}

/// Survey root words (or a limited subset) against a dictionary word list
///
/// # Panics
///
/// Panics if the progress bar template is invalid, which is a programming error.
pub fn run_survey<R, S>(
    roots: &[R],
    dictionary_words: &[S],
    min_len: usize,
    limit: Option<usize>,
) -> SurveyStatistics
where
    R: AsRef<str>,
    S: AsRef<str> + Sync,
{
    let roots: Vec<&str> = roots
        .iter()
        .map(|r| r.as_ref())
        .take(limit.unwrap_or(roots.len()))
        .collect();

    println!("🔎 Surveying {} root words...", roots.len());

    // Progress bar
    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut reports = Vec::with_capacity(roots.len());

    for root in roots {
        let report = RootReport::new(root, dictionary_words, min_len);
        pb.set_message(format!("{}: {} words", report.root, report.count()));
        reports.push(report);
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let stats = summarize(reports, start.elapsed());
    tracing::info!(
        roots = stats.total_roots,
        elapsed_ms = stats.total_time.as_millis() as u64,
        "survey finished"
    );
    stats
}

/// Aggregate per-root reports into survey statistics
#[must_use]
pub fn summarize(reports: Vec<RootReport>, total_time: Duration) -> SurveyStatistics {
    let total_roots = reports.len();

    let (average_words, average_max_score) = if total_roots == 0 {
        (0.0, 0.0)
    } else {
        let words: usize = reports.iter().map(RootReport::count).sum();
        let scores: usize = reports.iter().map(|r| r.max_score).sum();
        (
            words as f64 / total_roots as f64,
            scores as f64 / total_roots as f64,
        )
    };

    // Ties go to the root listed first
    let richest = reports
        .iter()
        .rev()
        .max_by_key(|r| r.count())
        .map(|r| (r.root.clone(), r.count()));
    let poorest = reports
        .iter()
        .min_by_key(|r| r.count())
        .map(|r| (r.root.clone(), r.count()));

    SurveyStatistics {
        total_roots,
        reports,
        total_time,
        average_words,
        average_max_score,
        richest,
        poorest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["silk", "worm", "milk", "owl", "lute", "bolt", "able", "stub"];

    #[test]
    fn survey_covers_every_root() {
        let stats = run_survey(&["silkworm", "absolute"], WORDS, 3, None);

        assert_eq!(stats.total_roots, 2);
        assert_eq!(stats.reports.len(), 2);
        assert_eq!(stats.reports[0].root, "silkworm");
        assert_eq!(stats.reports[0].count(), 4);
        assert_eq!(stats.reports[1].count(), 4);
    }

    #[test]
    fn survey_respects_limit() {
        let stats = run_survey(&["silkworm", "absolute", "carnival"], WORDS, 3, Some(1));
        assert_eq!(stats.total_roots, 1);
    }

    #[test]
    fn summarize_picks_extremes() {
        let reports = vec![
            RootReport::new("silkworm", WORDS, 3),
            RootReport::new("zzz", WORDS, 3),
        ];
        let stats = summarize(reports, Duration::ZERO);

        assert_eq!(stats.richest, Some(("silkworm".to_string(), 4)));
        assert_eq!(stats.poorest, Some(("zzz".to_string(), 0)));
        assert!((stats.average_words - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(Vec::new(), Duration::ZERO);
        assert_eq!(stats.total_roots, 0);
        assert!(stats.richest.is_none());
        assert!(stats.poorest.is_none());
        assert!(stats.average_words.abs() < f64::EPSILON);
    }
}
