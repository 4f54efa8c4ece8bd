//! Formatting utilities for terminal output

use crate::core::{GuessOutcome, STARTING_LIVES};

/// Gallows drawings, indexed by lives lost
const GALLOWS: [&str; STARTING_LIVES as usize + 1] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n=======",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n=======",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n=======",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n=======",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n=======",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n=======",
];

/// Join the per-position progress with spaces, e.g. `A _ O _`
#[must_use]
pub fn progress_line(progress: &[char]) -> String {
    let mut line = String::with_capacity(progress.len() * 2);
    for (i, ch) in progress.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push(*ch);
    }
    line
}

/// One heart per remaining life
#[must_use]
pub fn hearts(lives: u8) -> String {
    "❤".repeat(usize::from(lives))
}

/// Comma-separated uppercase letters, or `-` when there are none
#[must_use]
pub fn letter_list<'a>(letters: impl IntoIterator<Item = &'a char>) -> String {
    let list: Vec<String> = letters
        .into_iter()
        .map(|ch| ch.to_uppercase().to_string())
        .collect();
    if list.is_empty() {
        "-".to_string()
    } else {
        list.join(", ")
    }
}

/// Player-facing message for a guess outcome
#[must_use]
pub fn outcome_message(outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::InvalidInput => "Type exactly one letter.".to_string(),
        GuessOutcome::AlreadyDiscovered(letter) => {
            format!("The letter '{letter}' has already been discovered.")
        }
        GuessOutcome::AlreadyTried(letter) => format!("You already tried the letter '{letter}'."),
        GuessOutcome::Correct(letter) => format!("✅ The letter '{letter}' is in the word!"),
        GuessOutcome::Incorrect(letter) => {
            format!("❌ The letter '{letter}' is not in the word.")
        }
    }
}

/// ASCII gallows for the given number of remaining lives
#[must_use]
pub fn gallows(lives: u8) -> &'static str {
    let lost = STARTING_LIVES.saturating_sub(lives);
    GALLOWS[usize::from(lost.min(STARTING_LIVES))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    #[test]
    fn progress_line_spaces_positions() {
        assert_eq!(progress_line(&['A', '_', 'O', '_']), "A _ O _");
        assert_eq!(progress_line(&['_']), "_");
        assert_eq!(progress_line(&[]), "");
    }

    #[test]
    fn hearts_match_lives() {
        assert_eq!(hearts(3), "❤❤❤");
        assert_eq!(hearts(0), "");
    }

    #[test]
    fn letter_list_formats() {
        assert_eq!(letter_list(&['q', 'z']), "Q, Z");
        assert_eq!(letter_list(&Vec::<char>::new()), "-");
    }

    #[test]
    fn outcome_messages_mention_letter() {
        let letter = Letter::parse("a").unwrap();
        assert!(outcome_message(GuessOutcome::Correct(letter)).contains("'A' is in the word"));
        assert!(outcome_message(GuessOutcome::Incorrect(letter)).contains("'A' is not"));
        assert!(outcome_message(GuessOutcome::AlreadyTried(letter)).contains("already tried"));
        assert!(
            outcome_message(GuessOutcome::AlreadyDiscovered(letter)).contains("already been")
        );
        assert_eq!(
            outcome_message(GuessOutcome::InvalidInput),
            "Type exactly one letter."
        );
    }

    #[test]
    fn gallows_progresses_with_lost_lives() {
        assert!(!gallows(5).contains('O'));
        assert!(gallows(4).contains('O'));
        assert!(gallows(0).contains("/ \\"));
        assert_ne!(gallows(3), gallows(2));
    }
}
