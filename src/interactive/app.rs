//! TUI application state and logic

use crate::core::Submission;
use crate::game::{GameSession, WordListDictionary, possible_words};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: GameSession,
    pub roots: Vec<String>,
    pub dictionary: WordListDictionary,
    pub rng: StdRng,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub best_possible: usize,
    pub should_quit: bool,
}

/// Modal error shown after a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(
        session: GameSession,
        roots: Vec<String>,
        dictionary: WordListDictionary,
        rng: StdRng,
    ) -> Self {
        Self {
            session,
            roots,
            dictionary,
            rng,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Welcome! Make words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            best_possible: 0,
            should_quit: false,
        }
    }

    /// Draw a new root word and clear all progress
    pub fn new_game(&mut self) {
        self.session.start(&self.roots, &mut self.rng);
        self.input_buffer.clear();
        self.alert = None;

        let words: Vec<&str> = self.dictionary.words().collect();
        let found = possible_words(
            self.session.root_word(),
            &words,
            self.session.config().min_word_len,
        );
        self.best_possible = crate::game::max_score(&found);

        self.add_message(
            &format!(
                "New word: {} ({} words to find)",
                self.session.root_word().to_uppercase(),
                found.len()
            ),
            MessageStyle::Info,
        );
    }

    /// Submit whatever is in the input field
    ///
    /// Accepted words clear the field; rejected ones raise an alert and leave
    /// the text in place for editing.
    pub fn handle_submit(&mut self) {
        match self.session.submit(&self.input_buffer, &self.dictionary) {
            Ok(submission) => {
                if submission.clears_input() {
                    self.input_buffer.clear();
                }
                if let Submission::Accepted { word, .. } = &submission {
                    self.add_message(
                        &format!("{} +{}", word.to_uppercase(), submission.points()),
                        MessageStyle::Success,
                    );
                }
            }
            Err(rejection) => {
                let word = crate::core::normalize(&self.input_buffer);
                self.alert = Some(Alert {
                    title: rejection.title().to_string(),
                    message: rejection.message(&word),
                });
                self.add_message(
                    &format!("{}: {}", word.to_uppercase(), rejection.title()),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// React to a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // An open alert swallows keys until dismissed
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alert = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(2) => self.new_game(),
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char(c) if !ctrl => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.handle_submit(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        score = app.session.score(),
        words = app.session.used_words().len(),
        "game closed"
    );

    Ok(())
}
