//! Simple line-based game mode
//!
//! Text-based game loop without TUI: one line of input per guess.

use super::session::SessionStats;
use crate::core::{GuessOutcome, RoundEngine, RoundStatus, WordList};
use crate::output::formatters::{hearts, letter_list, outcome_message, progress_line};
use anyhow::Result;
use colored::Colorize;
use log::info;
use rand::Rng;
use std::io::{BufRead, Write};

/// How a round's input loop ended
enum RoundEnd {
    Finished,
    Quit,
}

/// Run the line-based game until the player stops or input runs out
///
/// Each round draws a word from `words`; after a round ends the player is asked
/// whether to play again. Typing `quit` or `exit` at any prompt, or closing
/// the input, ends the session.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
pub fn run_simple<R, W, G>(
    words: &WordList,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> Result<SessionStats>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(output, "\n╔══════════════════════════════════════╗")?;
    writeln!(output, "║              H A N G M A N           ║")?;
    writeln!(output, "╚══════════════════════════════════════╝")?;
    writeln!(output, "Commands: 'quit' to exit")?;

    let mut stats = SessionStats::default();

    loop {
        let mut round = RoundEngine::with_rng(words, rng);
        writeln!(
            output,
            "\nGuess a word with {} letters.",
            round.secret().len()
        )?;

        if let RoundEnd::Quit = play_round(&mut round, input, output)? {
            break;
        }

        stats.record(&round);
        print_round_result(&round, output)?;
        info!(
            "Round finished: {:?}, session {}/{} won",
            round.status(),
            stats.rounds_won,
            stats.rounds_played
        );

        match read_command(input, output, "Play again? (yes/no)")?.as_deref() {
            Some("yes" | "y") => writeln!(output, "\n🔄 New round started!")?,
            _ => break,
        }
    }

    writeln!(output, "\n👋 Thanks for playing!")?;
    if stats.rounds_played > 0 {
        writeln!(
            output,
            "Rounds won: {}/{} | Total score: {}",
            stats.rounds_won, stats.rounds_played, stats.total_score
        )?;
    }
    Ok(stats)
}

fn play_round<R: BufRead, W: Write>(
    round: &mut RoundEngine,
    input: &mut R,
    output: &mut W,
) -> Result<RoundEnd> {
    while round.status() == RoundStatus::InProgress {
        writeln!(
            output,
            "\nLives remaining: {}",
            hearts(round.lives_remaining()).red()
        )?;
        writeln!(output, "Word: {}", progress_line(&round.progress()).bold())?;
        if !round.wrong_letters().is_empty() {
            writeln!(output, "Wrong letters: {}", letter_list(round.wrong_letters()))?;
        }

        let Some(guess) = read_command(input, output, "Guess a letter")? else {
            return Ok(RoundEnd::Quit);
        };
        if matches!(guess.as_str(), "quit" | "exit") {
            return Ok(RoundEnd::Quit);
        }

        let outcome = round.submit_guess(&guess)?;
        let message = outcome_message(outcome);
        match outcome {
            GuessOutcome::Correct(_) => writeln!(output, "{}", message.green())?,
            GuessOutcome::Incorrect(_) => writeln!(output, "{}", message.red())?,
            GuessOutcome::InvalidInput
            | GuessOutcome::AlreadyDiscovered(_)
            | GuessOutcome::AlreadyTried(_) => writeln!(output, "⚠ {}", message.yellow())?,
        }
    }

    Ok(RoundEnd::Finished)
}

fn print_round_result<W: Write>(round: &RoundEngine, output: &mut W) -> Result<()> {
    let word = round.secret().text().to_uppercase();
    match round.status() {
        RoundStatus::Won => {
            writeln!(output, "\nWord: {}", progress_line(&round.progress()).bold())?;
            writeln!(
                output,
                "\n{}",
                "🎉 Congratulations! You guessed the word!".bright_green().bold()
            )?;
            let score = round.score().unwrap_or(0);
            writeln!(output, "{}", format!("Final score: {score}").bright_yellow())?;
        }
        RoundStatus::Lost => {
            writeln!(output, "\n{}", "💀 Game over! You ran out of lives.".red().bold())?;
            writeln!(output, "The word was: {}", word.bright_white().bold())?;
        }
        RoundStatus::InProgress => {}
    }
    Ok(())
}

/// Prompt and read one trimmed, lowercased line; `None` once input is exhausted
fn read_command<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(word: &str, script: &str) -> (SessionStats, String) {
        let words = WordList::new(words_from_slice(&[word])).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();

        let stats = run_simple(&words, &mut rng, &mut input, &mut output).unwrap();
        (stats, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_round_prints_score() {
        let (stats, output) = play("amor", "a\nm\no\nr\nno\n");

        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(stats.total_score, 20);
        assert!(output.contains("Guess a word with 4 letters."));
        assert!(output.contains("Congratulations"));
        assert!(output.contains("Final score: 20"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn losing_round_reveals_word() {
        let (stats, output) = play("amor", "z\nx\nq\nw\nv\n");

        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.rounds_won, 0);
        assert!(output.contains("Game over"));
        assert!(output.contains("AMOR"));
    }

    #[test]
    fn invalid_and_repeated_guesses_are_reported() {
        let (stats, output) = play("amor", "ab\na\na\nz\nz\n");

        assert_eq!(stats.rounds_played, 0);
        assert!(output.contains("Type exactly one letter."));
        assert!(output.contains("has already been discovered"));
        assert!(output.contains("You already tried the letter 'Z'"));
        assert!(output.contains("Wrong letters: Z"));
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let (stats, _) = play("doce", "  D \nO\r\nc\nE\nn\n");
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(stats.total_score, 20);
    }

    #[test]
    fn quit_ends_session_mid_round() {
        let (stats, output) = play("amor", "a\nquit\nm\n");

        assert_eq!(stats.rounds_played, 0);
        assert!(output.contains("Thanks for playing"));
        assert!(!output.contains("The letter 'M'"));
    }

    #[test]
    fn play_again_starts_new_round() {
        let (stats, output) = play("doce", "d\no\nc\ne\nyes\nz\nx\nq\nw\nv\nno\n");

        assert_eq!(stats.rounds_played, 2);
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(stats.total_score, 20);
        assert!(output.contains("New round started"));
        assert!(output.contains("Rounds won: 1/2"));
    }

    #[test]
    fn empty_input_abandons_quietly() {
        let (stats, output) = play("amor", "");
        assert_eq!(stats, SessionStats::default());
        assert!(output.contains("Guess a letter"));
    }
}
