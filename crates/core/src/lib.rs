//! Tic-Tac-Toe Core - Game abstraction and common types
//!
//! This crate provides the `Game` trait that the minimax search is written
//! against, so the search never depends on a concrete board representation.
//!
//! # Types
//!
//! - [`Game`] - Trait for game implementations
//! - [`Outcome`] - Result of a finished game, scored from X's perspective
//! - [`Polarity`] - Whether a search ply maximizes or minimizes the score

mod error;
mod game;
mod types;

pub use error::{GameError, Result};
pub use game::Game;
pub use types::{Outcome, Polarity};
