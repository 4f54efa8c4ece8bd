//! TUI application state and logic

use crate::commands::SessionStats;
use crate::core::{GuessOutcome, Letter, RoundEngine, RoundStatus, WordList};
use crate::output::formatters::outcome_message;
use crate::solver::LetterAdvisor;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub advisor: LetterAdvisor<'a>,
    pub round: RoundEngine,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub hint: Option<Letter>,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
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
    Warning,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a WordList, mut rng: StdRng) -> Self {
        let round = RoundEngine::with_rng(words, &mut rng);
        let mut app = Self {
            words,
            advisor: LetterAdvisor::new(words),
            round,
            messages: Vec::new(),
            stats: SessionStats::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            hint: None,
            rng,
        };
        app.announce_round();
        app
    }

    /// Start a fresh round with a newly drawn word
    pub fn new_round(&mut self) {
        self.round = RoundEngine::with_rng(self.words, &mut self.rng);
        self.input_mode = InputMode::Guessing;
        self.hint = None;
        self.messages.clear();
        self.announce_round();
    }

    fn announce_round(&mut self) {
        let text = format!("Guess a word with {} letters.", self.round.secret().len());
        self.add_message(&text, MessageStyle::Info);
        self.add_message("Type a letter to guess, TAB for a hint.", MessageStyle::Info);
    }

    /// Submit one guess and report the outcome
    pub fn handle_guess(&mut self, input: &str) {
        if self.input_mode == InputMode::RoundOver {
            return;
        }

        match self.round.submit_guess(input) {
            Ok(outcome) => {
                let style = match outcome {
                    GuessOutcome::Correct(_) => MessageStyle::Success,
                    GuessOutcome::Incorrect(_) => MessageStyle::Error,
                    GuessOutcome::InvalidInput
                    | GuessOutcome::AlreadyDiscovered(_)
                    | GuessOutcome::AlreadyTried(_) => MessageStyle::Warning,
                };
                if outcome.is_new_guess() {
                    self.hint = None;
                }
                self.add_message(&outcome_message(outcome), style);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }

        if self.round.status().is_over() {
            self.finish_round();
        }
    }

    /// Ask the advisor for the next letter
    pub fn request_hint(&mut self) {
        if self.input_mode == InputMode::RoundOver {
            return;
        }

        self.hint = self.advisor.suggest(&self.round);
        match self.hint {
            Some(letter) => {
                let candidates = self.advisor.candidates(&self.round).len();
                self.add_message(
                    &format!("Hint: try '{letter}' ({candidates} possible words)"),
                    MessageStyle::Info,
                );
            }
            None => self.add_message("No hint available", MessageStyle::Warning),
        }
    }

    fn finish_round(&mut self) {
        self.stats.record(&self.round);
        self.input_mode = InputMode::RoundOver;
        self.hint = None;

        let word = self.round.secret().text().to_uppercase();
        match self.round.status() {
            RoundStatus::Won => {
                let score = self.round.score().unwrap_or(0);
                self.add_message(
                    &format!("🎉 You guessed {word}! Final score: {score}"),
                    MessageStyle::Success,
                );
            }
            RoundStatus::Lost => {
                self.add_message(
                    &format!("💀 Out of lives! The word was {word}"),
                    MessageStyle::Error,
                );
            }
            RoundStatus::InProgress => return,
        }
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
        info!(
            "Round finished: {:?}, session {}/{} won",
            self.round.status(),
            self.stats.rounds_won,
            self.stats.rounds_played
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
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
    enable_raw_mode()?;
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

    match res {
        Ok(stats) => {
            println!(
                "👋 Thanks for playing! Rounds won: {}/{} | Total score: {}",
                stats.rounds_won, stats.rounds_played, stats.total_score
            );
        }
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<SessionStats> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::RoundOver => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('n') => app.new_round(),
                        _ => {}
                    },
                    InputMode::Guessing => match key.code {
                        KeyCode::Esc => app.should_quit = true,
                        KeyCode::Tab => app.request_hint(),
                        KeyCode::Char(c) => app.handle_guess(&c.to_string()),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
