//! Implementation of the `Game` trait for tic-tac-toe.

use tictactoe_core::{Game, Outcome, Result};

use crate::{Action, Board, Player};

/// Tic-tac-toe rules for the minimax search.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl Game for TicTacToe {
    type State = Board;
    type Action = Action;
    type Player = Player;

    fn initial_state(&self) -> Board {
        Board::new()
    }

    fn player(&self, state: &Board) -> Result<Player> {
        state.player()
    }

    fn actions(&self, state: &Board) -> Vec<Action> {
        state.actions()
    }

    fn result(&self, state: &Board, action: Action) -> Result<Board> {
        state.result(action)
    }

    fn winner(&self, state: &Board) -> Option<Player> {
        state.winner()
    }

    fn terminal(&self, state: &Board) -> bool {
        state.is_terminal()
    }

    fn utility(&self, state: &Board) -> Result<Outcome> {
        state.utility()
    }
}
