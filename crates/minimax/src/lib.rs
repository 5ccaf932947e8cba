//! Exhaustive minimax search.
//!
//! This crate provides a generic minimax search that can be used with any
//! game implementing the `tictactoe_core::Game` trait. Every line of play is
//! explored to the end of the game: there is no pruning, caching or depth
//! limit, so the returned move is optimal against any opponent.
//!
//! # Features
//!
//! - **Generic**: Works with any `Game` implementation
//! - **Single procedure**: maximizing and minimizing plies share one search
//!   parametrized by [`Polarity`](tictactoe_core::Polarity)
//! - **Deterministic ties**: the first action in enumeration order wins ties
//! - **Root parallelism**: optional, with identical results
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{Action, Board, TicTacToe};
//! use tictactoe_minimax::{minimax, Minimax, SearchConfig};
//!
//! // X to move can complete the top row.
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(minimax(&TicTacToe, &board).unwrap(), Some(Action::new(0, 2)));
//!
//! let result = Minimax::new(SearchConfig::parallel())
//!     .search(&TicTacToe, &board)
//!     .unwrap()
//!     .expect("board is not terminal");
//! println!("Best action: {}", result.best_action);
//! println!("Value: {}", result.value);
//! ```

pub mod config;
pub mod search;

pub use config::SearchConfig;
pub use search::{maximize_value, minimax, minimize_value, value, Minimax, SearchResult};
