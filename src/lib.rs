//! Hangman
//!
//! A terminal word-guessing game: guess the secret word one letter at a time
//! before five wrong letters use up your lives.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessOutcome, RoundEngine, RoundStatus, Word, WordList};
//!
//! let words = WordList::new(vec![Word::new("amor").unwrap()]).unwrap();
//! let mut round = RoundEngine::new(&words);
//!
//! for guess in ["a", "m", "o", "r"] {
//!     assert!(matches!(round.submit_guess(guess), Ok(GuessOutcome::Correct(_))));
//! }
//! assert_eq!(round.status(), RoundStatus::Won);
//! assert_eq!(round.score(), Some(20));
//! ```

// Core domain types
pub mod core;

// Letter suggestions
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
