//! Word Scramble - CLI
//!
//! Anagram word game with TUI and plain CLI modes, plus word list reports.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{find_solutions, run_simple, run_survey},
    game::{GameSession, SessionConfig, WordListDictionary, config::DEFAULT_LANGUAGE},
    output::{print_solutions, print_survey_statistics},
    wordlists::{
        DICTIONARY, ROOT_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a newline-delimited file
    #[arg(short, long, global = true, default_value = "embedded")]
    roots: String,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Language code used for dictionary lookups
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for picking root words (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one word per line, no TUI)
    Simple,

    /// List every word a root word accepts
    Solutions {
        /// The root word to solve
        root: String,

        /// Show at most this many words (longest first)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Count the possible words for every root word
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Set up tracing to stderr
///
/// `RUST_LOG` wins over the `-v` count when set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load a word list based on a source flag
///
/// "embedded" uses the list compiled into the binary, anything else is a path.
fn load_words(source: &str, embedded: &[&str], what: &str) -> Result<Vec<String>> {
    let words = if source == "embedded" {
        words_from_slice(embedded)
    } else {
        load_from_file(source).with_context(|| format!("could not load {what} from {source}"))?
    };

    tracing::info!(source, count = words.len(), "loaded {what}");
    Ok(words)
}

/// Build the lookup dictionary used by the game modes
fn build_dictionary(language: &str, words: &[String]) -> WordListDictionary {
    let dictionary = WordListDictionary::new(language, words);
    tracing::info!(
        language = dictionary.language(),
        words = dictionary.len(),
        "dictionary ready"
    );
    dictionary
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let roots = load_words(&cli.roots, ROOT_WORDS, "root words")?;
    let dictionary_words = load_words(&cli.dictionary, DICTIONARY, "dictionary")?;
    let config = SessionConfig::with_language(cli.language.clone());

    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = build_dictionary(&cli.language, &dictionary_words);
            run_play_command(config, roots, dictionary, rng)
        }
        Commands::Simple => {
            let dictionary = build_dictionary(&cli.language, &dictionary_words);
            run_simple_command(config, &roots, &dictionary, rng)
        }
        Commands::Solutions { root, limit } => {
            let report = find_solutions(&root, &dictionary_words, config.min_word_len, limit)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_solutions(&report);
            Ok(())
        }
        Commands::Survey { limit } => {
            let stats = run_survey(&roots, &dictionary_words, config.min_word_len, limit);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

fn run_simple_command(
    config: SessionConfig,
    roots: &[String],
    dictionary: &WordListDictionary,
    mut rng: StdRng,
) -> Result<()> {
    let mut session = GameSession::new(config);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    run_simple(
        &mut session,
        roots,
        dictionary,
        &mut rng,
        &mut input,
        &mut output,
    )
    .context("simple mode I/O failed")
}

fn run_play_command(
    config: SessionConfig,
    roots: Vec<String>,
    dictionary: WordListDictionary,
    rng: StdRng,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(GameSession::new(config), roots, dictionary, rng);
    run_tui(app)
}
