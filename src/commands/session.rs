//! Per-session tallies across rounds

use crate::core::{RoundEngine, RoundStatus};

/// Results accumulated over every finished round of a session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub total_score: usize,
    pub best_score: usize,
}

impl SessionStats {
    /// Record a round; rounds still in progress are ignored
    pub fn record(&mut self, round: &RoundEngine) {
        match round.status() {
            RoundStatus::InProgress => {}
            RoundStatus::Lost => self.rounds_played += 1,
            RoundStatus::Won => {
                let score = round.score().unwrap_or(0);
                self.rounds_played += 1;
                self.rounds_won += 1;
                self.total_score += score;
                self.best_score = self.best_score.max(score);
            }
        }
    }

    /// Percentage of rounds won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}
