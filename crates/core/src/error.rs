use thiserror::Error;

/// Errors that can occur when querying or searching a game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invalid mark counts: X={x}, O={o} (X must equal O or lead by one)")]
    InvalidMarkCounts { x: usize, o: usize },

    #[error("Game is not terminal")]
    NotTerminal,

    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Invalid score: {0} (expected -1, 0 or 1)")]
    InvalidScore(i8),
}

/// Convenience Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
