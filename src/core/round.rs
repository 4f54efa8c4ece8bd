//! Round state machine
//!
//! A round owns one secret word and tracks every guess made against it until
//! the word is fully revealed or the lives run out.

use super::{GameError, Letter, Word, WordList};
use log::{debug, trace};
use rand::Rng;
use std::collections::BTreeSet;

/// Lives a player starts each round with
pub const STARTING_LIVES: u8 = 5;

/// Shown in place of letters that have not been discovered yet
pub const PLACEHOLDER: char = '_';

/// Result of submitting one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input was not exactly one alphabetic character
    InvalidInput,
    /// Letter was already revealed
    AlreadyDiscovered(Letter),
    /// Letter was already guessed and is not in the word
    AlreadyTried(Letter),
    /// New letter that occurs in the word
    Correct(Letter),
    /// New letter that does not occur in the word; costs one life
    Incorrect(Letter),
}

impl GuessOutcome {
    /// Whether the guess changed the round state
    #[must_use]
    pub const fn is_new_guess(self) -> bool {
        matches!(self, Self::Correct(_) | Self::Incorrect(_))
    }
}

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A single round of hangman
///
/// `InProgress` moves to `InProgress`, `Won` or `Lost` on each guess; `Won`
/// and `Lost` are terminal.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    secret: Word,
    discovered: BTreeSet<char>,
    wrong: BTreeSet<char>,
    lives: u8,
}

impl RoundEngine {
    /// Start a round with a word drawn from `words` using the thread RNG
    #[must_use]
    pub fn new(words: &WordList) -> Self {
        Self::with_rng(words, &mut rand::rng())
    }

    /// Start a round with a word drawn from `words` using the given RNG
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{RoundEngine, RoundStatus, Word, WordList};
    ///
    /// let words = WordList::new(vec![Word::new("amor").unwrap()]).unwrap();
    /// let round = RoundEngine::with_rng(&words, &mut rand::rng());
    ///
    /// assert_eq!(round.secret().text(), "amor");
    /// assert_eq!(round.progress(), vec!['_'; 4]);
    /// assert_eq!(round.status(), RoundStatus::InProgress);
    /// ```
    pub fn with_rng<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Self {
        let secret = words.pick(rng).clone();
        debug!("New round started with a {}-letter word", secret.len());
        trace!("Secret word: {secret}");

        Self {
            secret,
            discovered: BTreeSet::new(),
            wrong: BTreeSet::new(),
            lives: STARTING_LIVES,
        }
    }

    /// Submit one guess
    ///
    /// Validation short-circuits in this order: invalid input, already
    /// discovered, already tried, then correct or incorrect. Only a new wrong
    /// letter costs a life.
    ///
    /// # Errors
    /// Returns `GameError::RoundOver` if the round has already been won or lost.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        if self.status().is_over() {
            return Err(GameError::RoundOver);
        }

        let Some(letter) = Letter::parse(input) else {
            trace!("Rejected guess input {input:?}");
            return Ok(GuessOutcome::InvalidInput);
        };
        let ch = letter.as_char();

        let outcome = if self.discovered.contains(&ch) {
            GuessOutcome::AlreadyDiscovered(letter)
        } else if self.wrong.contains(&ch) {
            GuessOutcome::AlreadyTried(letter)
        } else if self.secret.contains(ch) {
            self.discovered.insert(ch);
            GuessOutcome::Correct(letter)
        } else {
            self.wrong.insert(ch);
            self.lives = self.lives.saturating_sub(1);
            GuessOutcome::Incorrect(letter)
        };

        debug!(
            "Guess {letter}: {outcome:?} ({} lives left, status {:?})",
            self.lives,
            self.status()
        );
        Ok(outcome)
    }

    /// Per-position view of the word: uppercase letter if discovered, else `_`
    #[must_use]
    pub fn progress(&self) -> Vec<char> {
        self.secret
            .chars()
            .map(|ch| {
                if self.discovered.contains(&ch) {
                    ch.to_ascii_uppercase()
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    /// Current status of the round
    ///
    /// Zero lives with a fully revealed word cannot happen: lives only drop on
    /// a letter that is not in the word, which reveals nothing.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.lives == 0 {
            RoundStatus::Lost
        } else if self.is_fully_revealed() {
            RoundStatus::Won
        } else {
            RoundStatus::InProgress
        }
    }

    /// Final score: remaining lives times word length, only once the round is won
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        match self.status() {
            RoundStatus::Won => Some(usize::from(self.lives) * self.secret.len()),
            RoundStatus::InProgress | RoundStatus::Lost => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn lives_remaining(&self) -> u8 {
        self.lives
    }

    /// Letters confirmed to be in the word, sorted
    #[inline]
    #[must_use]
    pub const fn discovered_letters(&self) -> &BTreeSet<char> {
        &self.discovered
    }

    /// Letters guessed that are not in the word, sorted
    #[inline]
    #[must_use]
    pub const fn wrong_letters(&self) -> &BTreeSet<char> {
        &self.wrong
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.discovered.len() + self.wrong.len()
    }

    /// Whether a letter has already been guessed, right or wrong
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.discovered.contains(&letter) || self.wrong.contains(&letter)
    }

    fn is_fully_revealed(&self) -> bool {
        self.secret.chars().all(|ch| self.discovered.contains(&ch))
    }
}
