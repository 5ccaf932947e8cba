use std::fmt;

use serde::{Deserialize, Serialize};

/// A move: the (row, column) of the square to mark.
///
/// Rows run top to bottom and columns left to right, both 0-2.
/// ```text
/// (0,0) | (0,1) | (0,2)
/// ---------------------
/// (1,0) | (1,1) | (1,2)
/// ---------------------
/// (2,0) | (2,1) | (2,2)
/// ```
/// Construction does not check bounds; `Board::result` rejects
/// off-board coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Create an action from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self::new(index / 3, index % 3))
        } else {
            None
        }
    }

    /// Row-major index of this action (0-8 when on the board).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Returns true if both coordinates are in 0-2.
    pub fn is_on_board(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
