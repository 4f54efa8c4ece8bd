//! Letter-guessing assistance
//!
//! Suggests guesses from the visible state of a round, for hints and self-play.

mod advisor;

pub use advisor::{LetterAdvisor, letter_frequencies};
