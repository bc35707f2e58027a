//! Formatting utilities for terminal output

/// Circled number badge for a word length
///
/// Lengths 1-20 use the Unicode circled digits, anything else falls back to
/// a parenthesized number.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match len {
        1..=20 => {
            // U+2460 is CIRCLED DIGIT ONE; the next 19 code points follow in order
            let code = 0x2460 + (len as u32 - 1);
            char::from_u32(code).map_or_else(|| format!("({len})"), String::from)
        }
        _ => format!("({len})"),
    }
}

/// Spell a root word out as spaced capitals, e.g. `S I L K W O R M`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of the best possible score reached so far, as a percentage
#[must_use]
pub fn score_percent(score: usize, max_score: usize) -> f64 {
    if max_score == 0 {
        0.0
    } else {
        (score as f64 / max_score as f64 * 100.0).min(100.0)
    }
}
