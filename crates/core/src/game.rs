use std::fmt::Debug;
use std::hash::Hash;

use crate::{Outcome, Polarity, Result};

/// A two-player, zero-sum, perfect-information game.
///
/// This trait is the seam between the board rules and the minimax search.
/// Every method is a pure function of its inputs: states are values and
/// applying an action produces a new state without touching the old one.
pub trait Game: Sync {
    /// The game state (e.g., a tic-tac-toe board)
    type State: Clone + Send + Sync;

    /// A game action (e.g., a board coordinate)
    type Action: Copy + Eq + Hash + Debug + Send + Sync;

    /// A participant. Each maps to the polarity the search plays it with.
    type Player: Copy + Eq + Debug + Into<Polarity>;

    /// Returns the initial game state
    fn initial_state(&self) -> Self::State;

    /// Returns the player whose turn it is.
    ///
    /// # Errors
    /// Fails if the state violates the game's turn invariant.
    fn player(&self, state: &Self::State) -> Result<Self::Player>;

    /// Returns all legal actions from the given state, in a fixed order
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Applies an action, returning a new state (immutable operation)
    ///
    /// # Errors
    /// Fails if the action is not legal in `state`.
    fn result(&self, state: &Self::State, action: Self::Action) -> Result<Self::State>;

    /// Returns the winner, if any
    fn winner(&self, state: &Self::State) -> Option<Self::Player>;

    /// Returns true if the game has ended
    fn terminal(&self, state: &Self::State) -> bool;

    /// Returns the outcome of a finished game.
    ///
    /// # Errors
    /// Returns `GameError::NotTerminal` if the game is still in progress.
    fn utility(&self, state: &Self::State) -> Result<Outcome>;
}
