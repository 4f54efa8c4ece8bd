//! Core domain types for hangman
//!
//! This module contains the round state machine and the value types it is built from.
//! Nothing here performs I/O; rendering and input belong to the callers.

mod error;
mod letter;
mod round;
mod word;
mod word_list;

pub use error::GameError;
pub use letter::Letter;
pub use round::{GuessOutcome, PLACEHOLDER, RoundEngine, RoundStatus, STARTING_LIVES};
pub use word::{Word, WordError};
pub use word_list::WordList;
