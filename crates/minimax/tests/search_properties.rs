//! Property-based tests for the minimax search.
//!
//! These tests check the search against the game rules on random reachable
//! boards:
//! - the chosen action is legal and achieves the reported value
//! - parallel and sequential search agree exactly
//! - the maximize/minimize procedures agree with the driver

use proptest::prelude::*;
use tictactoe_board::{Board, Player, TicTacToe};
use tictactoe_core::{Game, Outcome, Polarity};
use tictactoe_minimax::{maximize_value, minimax, minimize_value, value, Minimax, SearchConfig};

// =============================================================================
// Strategies
// =============================================================================

/// Generate a reachable board by playing random legal moves.
///
/// At least three plies are played to keep searches cheap.
fn arb_reachable_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(0usize..9, 3..=9).prop_map(|move_indices| {
        let mut board = Board::new();
        for idx in move_indices {
            if board.is_terminal() {
                break;
            }
            let actions = board.actions();
            board = board.result(actions[idx % actions.len()]).unwrap();
        }
        board
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The suggested action is legal, and exists exactly when the board is live.
    #[test]
    fn prop_minimax_legal(board in arb_reachable_board()) {
        let game = TicTacToe;
        match minimax(&game, &board).unwrap() {
            Some(action) => {
                prop_assert!(!game.terminal(&board));
                prop_assert!(game.actions(&board).contains(&action));
            }
            None => prop_assert!(game.terminal(&board)),
        }
    }

    /// The best action's child scores the reported value, and no other action
    /// does better for the mover.
    #[test]
    fn prop_best_action_achieves_value(board in arb_reachable_board()) {
        let game = TicTacToe;
        if game.terminal(&board) {
            return Ok(());
        }

        let result = Minimax::default().search(&game, &board).unwrap().unwrap();
        let mover: Polarity = game.player(&board).unwrap().into();

        let child = game.result(&board, result.best_action).unwrap();
        prop_assert_eq!(value(&game, &child, mover.opposite()).unwrap(), result.value.score());

        for (action, action_value) in &result.action_values {
            let better = match mover {
                Polarity::Maximize => *action_value > result.value,
                Polarity::Minimize => *action_value < result.value,
            };
            prop_assert!(!better, "{:?} beats the chosen action", action);
        }

        // Ties go to the first action in enumeration order.
        let first = result
            .action_values
            .iter()
            .find(|(_, v)| *v == result.value)
            .map(|(a, _)| *a);
        prop_assert_eq!(first, Some(result.best_action));
    }

    /// Root parallelism changes nothing observable.
    #[test]
    fn prop_parallel_matches_sequential(board in arb_reachable_board()) {
        let game = TicTacToe;
        let sequential = Minimax::new(SearchConfig::sequential()).search(&game, &board).unwrap();
        let parallel = Minimax::new(SearchConfig::parallel()).search(&game, &board).unwrap();
        prop_assert_eq!(sequential, parallel);
    }

    /// The polarity-specific procedures agree with the driver's value.
    #[test]
    fn prop_value_procedures_agree(board in arb_reachable_board()) {
        let game = TicTacToe;
        let expected = Minimax::default().value(&game, &board).unwrap().score();
        let actual = match game.player(&board).unwrap() {
            Player::X => maximize_value(&game, &board).unwrap(),
            Player::O => minimize_value(&game, &board).unwrap(),
        };
        prop_assert_eq!(actual, expected);
    }

    /// When the mover can win on the spot, the chosen action keeps a forced win.
    #[test]
    fn prop_immediate_win_is_winning(board in arb_reachable_board()) {
        let game = TicTacToe;
        if game.terminal(&board) {
            return Ok(());
        }
        let mover = game.player(&board).unwrap();
        let has_immediate_win = game
            .actions(&board)
            .into_iter()
            .any(|a| game.winner(&game.result(&board, a).unwrap()) == Some(mover));
        if !has_immediate_win {
            return Ok(());
        }

        let winning = match mover {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        };
        let result = Minimax::default().search(&game, &board).unwrap().unwrap();
        prop_assert_eq!(result.value, winning);
    }

    /// With one empty cell left, that cell is the move.
    #[test]
    fn prop_single_empty_cell(board in arb_reachable_board()) {
        let game = TicTacToe;
        let actions = game.actions(&board);
        if actions.len() != 1 || game.terminal(&board) {
            return Ok(());
        }
        prop_assert_eq!(minimax(&game, &board).unwrap(), Some(actions[0]));
    }
}
