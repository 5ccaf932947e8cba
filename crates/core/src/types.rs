//! Outcome and polarity types shared by the board and the search.
//!
//! Scores are always from the first player's (X's) perspective:
//! - +1: X won
//! - -1: O won
//! - 0: draw

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// The outcome of a finished game.
///
/// Ordered by score, so `OWins < Draw < XWins`.
///
/// # Example
/// ```
/// use tictactoe_core::Outcome;
///
/// assert_eq!(Outcome::XWins.score(), 1);
/// assert!(Outcome::OWins < Outcome::Draw);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    /// Get the signed score of this outcome.
    pub fn score(self) -> i8 {
        match self {
            Outcome::XWins => 1,
            Outcome::OWins => -1,
            Outcome::Draw => 0,
        }
    }

    /// Convert a score back into an outcome.
    ///
    /// # Errors
    /// Returns `GameError::InvalidScore` for anything outside {-1, 0, 1}.
    pub fn from_score(score: i8) -> Result<Self> {
        match score {
            1 => Ok(Outcome::XWins),
            -1 => Ok(Outcome::OWins),
            0 => Ok(Outcome::Draw),
            other => Err(GameError::InvalidScore(other)),
        }
    }
}

impl PartialOrd for Outcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Outcome {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score().cmp(&other.score())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X wins"),
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Direction a search ply optimizes the score in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Prefers higher scores (the first player).
    Maximize,
    /// Prefers lower scores (the second player).
    Minimize,
}

impl Polarity {
    /// Get the polarity of the other player.
    pub fn opposite(self) -> Self {
        match self {
            Polarity::Maximize => Polarity::Minimize,
            Polarity::Minimize => Polarity::Maximize,
        }
    }

    /// Bound every real score strictly improves on: -2 when maximizing,
    /// +2 when minimizing.
    pub fn initial_bound(self) -> i8 {
        match self {
            Polarity::Maximize => -2,
            Polarity::Minimize => 2,
        }
    }

    /// Returns true if `candidate` is strictly better than `best`.
    ///
    /// Equal scores never improve, which keeps the earliest of tied actions.
    pub fn improves(self, candidate: i8, best: i8) -> bool {
        match self {
            Polarity::Maximize => candidate > best,
            Polarity::Minimize => candidate < best,
        }
    }
}
