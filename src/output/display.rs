//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge, spaced_letters};
use crate::commands::SurveyStatistics;
use crate::game::RootReport;
use colored::Colorize;

/// Print every word a root accepts, grouped by length
pub fn print_solutions(report: &RootReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS:".bright_cyan().bold(),
        spaced_letters(&report.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if report.words.is_empty() {
        println!("\n   No words can be made from this root.");
        return;
    }

    let mut current_len = 0;
    for word in &report.words {
        let len = word.chars().count();
        if len != current_len {
            current_len = len;
            println!(
                "\n{} {}",
                length_badge(len).red().bold(),
                format!("{len}-letter words").bright_cyan()
            );
            print!("   ");
        }
        print!("{word} ");
    }
    println!();

    println!(
        "\n📊 {} words shown | best possible score: {}",
        report.words.len(),
        report.max_score.to_string().bright_yellow().bold()
    );
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Roots surveyed:    {}", stats.total_roots);
    println!(
        "   Average words:     {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("   Average max score: {:.1}", stats.average_max_score);
    println!("   Time taken:        {:.2}s", stats.total_time.as_secs_f64());

    if let Some((root, count)) = &stats.richest {
        println!("   Richest root:      {} ({count} words)", root.green());
    }
    if let Some((root, count)) = &stats.poorest {
        println!("   Poorest root:      {} ({count} words)", root.yellow());
    }

    let most = stats.richest.as_ref().map_or(0, |(_, count)| *count);

    println!("\n📈 {}", "Words per root:".bright_cyan().bold());
    for report in &stats.reports {
        let bar = create_progress_bar(report.count() as f64, most as f64, 30);
        println!(
            "   {:<10} {} {:4} words, max score {:4}",
            report.root,
            bar.green(),
            report.count(),
            report.max_score
        );
    }
}
