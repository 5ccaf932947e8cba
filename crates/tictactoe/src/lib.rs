//! Tic-Tac-Toe board model.
//!
//! A [`Board`] is a `Copy` value holding nine [`Cell`]s. Whose turn it is
//! comes from the mark counts alone, so a board carries no turn field.
//! [`TicTacToe`] exposes the rules through the `tictactoe_core::Game` trait
//! for the minimax search.
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{Action, Board, Player};
//!
//! let board = Board::new();
//! assert_eq!(board.player().unwrap(), Player::X);
//!
//! let next = board.result(Action::new(1, 1)).unwrap();
//! assert_eq!(next.player().unwrap(), Player::O);
//! assert!(board.is_empty());
//! ```

mod action;
mod board;
mod cell;
mod game_impl;

pub use action::Action;
pub use board::{Board, LINES};
pub use cell::{Cell, Player};
pub use game_impl::TicTacToe;
