use thiserror::Error;

/// Errors raised by the game core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Word list is empty; at least one valid word is required to start a round")]
    EmptyWordList,

    #[error("The round is already over; start a new round to keep playing")]
    RoundOver,
}
