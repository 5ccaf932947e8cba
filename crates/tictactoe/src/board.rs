use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tictactoe_core::{GameError, Outcome, Result};

use crate::{Action, Cell, Player};

/// The eight winning lines in scan order: rows top to bottom, columns left
/// to right, main diagonal, anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)], // top row
    [(1, 0), (1, 1), (1, 2)], // middle row
    [(2, 0), (2, 1), (2, 2)], // bottom row
    [(0, 0), (1, 0), (2, 0)], // left column
    [(0, 1), (1, 1), (2, 1)], // center column
    [(0, 2), (1, 2), (2, 2)], // right column
    [(0, 0), (1, 1), (2, 2)], // main diagonal
    [(0, 2), (1, 1), (2, 0)], // anti-diagonal
];

/// A 3x3 tic-tac-toe board.
///
/// Boards are values: [`Board::result`] returns a new board and leaves
/// `self` untouched. The player to move is derived from the mark counts,
/// which must satisfy `o <= x <= o + 1`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Create the empty starting board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from rows without validating mark counts.
    ///
    /// Intended for fixtures; queries that need the turn report
    /// `GameError::InvalidMarkCounts` on malformed boards.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Get the cell at (row, col), if on the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// The rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.iter().filter(|c| c.is_empty()).count()
    }

    /// Returns true if no mark has been placed.
    pub fn is_empty(&self) -> bool {
        self.empty_count() == 9
    }

    /// Count (X, O) marks.
    pub fn mark_counts(&self) -> (usize, usize) {
        self.iter().fold((0, 0), |(x, o), cell| match cell {
            Cell::X => (x + 1, o),
            Cell::O => (x, o + 1),
            Cell::Empty => (x, o),
        })
    }

    /// The player whose turn it is.
    ///
    /// X moves when the counts are equal, O when X leads by one. Terminal
    /// boards still answer by the same rule.
    ///
    /// # Errors
    /// Returns `GameError::InvalidMarkCounts` for any other count relation.
    pub fn player(&self) -> Result<Player> {
        let (x, o) = self.mark_counts();
        if x == o {
            Ok(Player::X)
        } else if x == o + 1 {
            Ok(Player::O)
        } else {
            Err(GameError::InvalidMarkCounts { x, o })
        }
    }

    /// All empty squares in row-major order.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(self.empty_count());
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    actions.push(Action::new(row, col));
                }
            }
        }
        actions
    }

    /// The board after the player to move marks `action`.
    ///
    /// # Errors
    /// Returns `GameError::InvalidAction` if the square is off the board or
    /// occupied, and `GameError::InvalidMarkCounts` if the board is malformed.
    pub fn result(&self, action: Action) -> Result<Board> {
        if !action.is_on_board() {
            return Err(GameError::InvalidAction(format!(
                "{action} is off the board"
            )));
        }
        let current = self.cells[action.row][action.col];
        if !current.is_empty() {
            return Err(GameError::InvalidAction(format!(
                "{action} is already occupied by {current}"
            )));
        }

        let player = self.player()?;
        let mut next = *self;
        next.cells[action.row][action.col] = player.mark();
        Ok(next)
    }

    /// The owner of the first complete line in [`LINES`] order, if any.
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(row, col)| self.cells[row][col]);
            if a == b && b == c {
                a.player()
            } else {
                None
            }
        })
    }

    /// Returns true if someone has won or no empty cell remains.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.empty_count() == 0
    }

    /// The outcome of a finished game.
    ///
    /// # Errors
    /// Returns `GameError::NotTerminal` while the game is still in progress.
    pub fn utility(&self) -> Result<Outcome> {
        if !self.is_terminal() {
            return Err(GameError::NotTerminal);
        }
        Ok(match self.winner() {
            Some(Player::X) => Outcome::XWins,
            Some(Player::O) => Outcome::OWins,
            None => Outcome::Draw,
        })
    }

    /// Compact text form, e.g. `XO./.X./..O`. Parses back with `FromStr`.
    pub fn to_text(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parse nine cells (`X`, `O`, or one of `.-_` for empty), ignoring
    /// whitespace and `/` or `|` separators.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        if chars.len() != 9 {
            return Err(GameError::InvalidBoard(format!(
                "expected 9 cells, got {} in '{s}'",
                chars.len()
            )));
        }

        let mut cells = [[Cell::Empty; 3]; 3];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / 3][i % 3] = Cell::from_char(c).ok_or_else(|| {
                GameError::InvalidBoard(format!("invalid cell '{c}' at position {i} in '{s}'"))
            })?;
        }

        let board = Board { cells };
        board.player()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "-----------")?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Cell::Empty => write!(f, "   ")?,
                    mark => write!(f, " {mark} ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
