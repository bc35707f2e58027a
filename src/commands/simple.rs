//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. Reads one word per line.

use crate::core::{Rejection, Submission};
use crate::game::{Dictionary, GameSession};
use crate::output::formatters::{length_badge, spaced_letters};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Lines starting with `:` are commands (`:new`, `:words`, `:help`, `:quit`);
/// anything else is submitted as a word. End of input quits.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D, R, I, W>(
    session: &mut GameSession,
    roots: &[String],
    dictionary: &D,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    print_help(out)?;

    session.start(roots, rng);
    print_root(session, out)?;

    let mut line = String::new();
    loop {
        write!(out, "Word: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match line.trim().to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                session.start(roots, rng);
                writeln!(out, "\n🔄 New word!")?;
                print_root(session, out)?;
            }
            ":words" | ":w" => print_words(session, out)?,
            ":help" | ":h" => print_help(out)?,
            _ => match session.submit(&line, dictionary) {
                Ok(submission) => {
                    if let Submission::Accepted { word, .. } = &submission {
                        writeln!(
                            out,
                            "  {} {} {}  score: {}\n",
                            "✓".green().bold(),
                            word.bright_white().bold(),
                            format!("+{}", submission.points()).green(),
                            session.score().to_string().bright_yellow().bold()
                        )?;
                    }
                }
                Err(rejection) => {
                    let word = crate::core::normalize(&line);
                    print_rejection(rejection, &word, out)?;
                }
            },
        }
    }

    writeln!(
        out,
        "👋 Thanks for playing! Final score: {} ({} words)\n",
        session.score(),
        session.used_words().len()
    )?;
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Make words from the letters of the root word.")?;
    writeln!(out, "Words must be real, at least three letters long, used once,")?;
    writeln!(out, "and not the root word itself. Each letter scores one point.\n")?;
    writeln!(out, "Commands: ':new' new word, ':words' your words, ':help', ':quit'\n")
}

fn print_root<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Root word: {}",
        spaced_letters(session.root_word()).bright_cyan().bold()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────\n")
}

fn print_words<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    if session.used_words().is_empty() {
        return writeln!(out, "No words yet.\n");
    }

    writeln!(out, "Your words (score {}):", session.score())?;
    for word in session.used_words() {
        writeln!(out, "  {} {}", length_badge(word.chars().count()).red(), word)?;
    }
    writeln!(out)
}

fn print_rejection<W: Write>(rejection: Rejection, word: &str, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "  {} {}: {}\n",
        "❌".red(),
        rejection.title().red().bold(),
        rejection.message(word)
    )
}
