use thiserror::Error;

use crate::wordbank::Difficulty;

/// The word list could not be read or parsed.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no candidate words for {0} difficulty")]
pub struct EmptyPoolError(pub Difficulty);

/// Misuse of the engine by the calling layer. These are never game events.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("guess must be a single letter a-z, got {0:?}")]
    InvalidLetter(String),
    #[error("secret word must be non-empty lowercase a-z, got {0:?}")]
    InvalidSecret(String),
    #[error("guess budget must be positive")]
    ZeroBudget,
    #[error("game is already over")]
    GameOver,
    #[error("outcome requested while the game is still in progress")]
    NotFinished,
}

/// Fatal error while running a game session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    EmptyPool(#[from] EmptyPoolError),
    #[error("engine contract violated: {0}")]
    Contract(#[from] ContractViolation),
}
