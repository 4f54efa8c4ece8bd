//! Self-play simulation
//!
//! Plays one round per word with the letter advisor and reports how it fared.

use crate::core::{GameError, RoundEngine, RoundStatus, STARTING_LIVES, Word, WordList};
use crate::solver::LetterAdvisor;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Outcome of one simulated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub word: String,
    pub won: bool,
    pub score: Option<usize>,
    pub lives_remaining: u8,
    pub guesses: usize,
}

/// Aggregated results of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    pub total_score: usize,
    pub average_guesses: f64,
    /// Rounds finished with `i` lives remaining, for `i` in `0..=STARTING_LIVES`
    pub lives_distribution: [usize; STARTING_LIVES as usize + 1],
    pub lost_words: Vec<String>,
    pub duration: Duration,
}

impl SimulationResult {
    /// Percentage of rounds won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.won as f64 / self.total_words as f64 * 100.0
        }
    }

    /// Mean score over won rounds
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.won == 0 {
            0.0
        } else {
            self.total_score as f64 / self.won as f64
        }
    }
}

/// Play every word in `words` (or the first `limit`) as a secret word
///
/// The advisor only knows `words` itself and the visible round state. Rounds
/// run in parallel.
///
/// # Errors
///
/// Returns `GameError::EmptyWordList` if `limit` selects no words.
pub fn run_simulation(
    words: &WordList,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<SimulationResult, GameError> {
    let targets = &words.words()[..limit.unwrap_or(words.len()).min(words.len())];
    if targets.is_empty() {
        return Err(GameError::EmptyWordList);
    }

    info!("Simulating {} rounds", targets.len());
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let advisor = LetterAdvisor::new(words);
    let reports = targets
        .par_iter()
        .map(|target| {
            let report = play_out(target, &advisor);
            pb.inc(1);
            report
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_and_clear();

    Ok(summarize(&reports, start.elapsed()))
}

/// Play a single round against `target`, following the advisor's suggestions
///
/// # Errors
///
/// Propagates `GameError` from the round engine.
pub fn play_out(target: &Word, advisor: &LetterAdvisor) -> Result<RoundReport, GameError> {
    let single = WordList::new([target.clone()])?;
    let mut round = RoundEngine::new(&single);

    while round.status() == RoundStatus::InProgress {
        let Some(letter) = advisor.suggest(&round) else {
            break;
        };
        round.submit_guess(&letter.as_char().to_string())?;
    }

    debug!(
        "Simulated '{}': {:?} after {} guesses",
        target,
        round.status(),
        round.guesses_made()
    );

    Ok(RoundReport {
        word: target.text().to_string(),
        won: round.status() == RoundStatus::Won,
        score: round.score(),
        lives_remaining: round.lives_remaining(),
        guesses: round.guesses_made(),
    })
}

fn summarize(reports: &[RoundReport], duration: Duration) -> SimulationResult {
    let mut lives_distribution = [0; STARTING_LIVES as usize + 1];
    for report in reports {
        lives_distribution[usize::from(report.lives_remaining.min(STARTING_LIVES))] += 1;
    }

    let won = reports.iter().filter(|r| r.won).count();
    let total_guesses: usize = reports.iter().map(|r| r.guesses).sum();

    SimulationResult {
        total_words: reports.len(),
        won,
        lost: reports.len() - won,
        total_score: reports.iter().filter_map(|r| r.score).sum(),
        average_guesses: total_guesses as f64 / reports.len().max(1) as f64,
        lives_distribution,
        lost_words: reports
            .iter()
            .filter(|r| !r.won)
            .map(|r| r.word.clone())
            .collect(),
        duration,
    }
}
