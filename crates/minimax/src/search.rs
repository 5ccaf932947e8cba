//! Minimax search implementation.
//!
//! One recursive procedure, [`value`], scores a state for either polarity:
//! it starts from the polarity's out-of-range bound and keeps a child's
//! score only when it strictly improves on the best so far. The root driver
//! [`Minimax::search`] applies the same rule to pick an action, so ties go
//! to the earliest action the game enumerates.

use rayon::prelude::*;
use tictactoe_core::{Game, Outcome, Polarity, Result};
use tracing::{debug, trace};

use crate::config::SearchConfig;

/// Result of a minimax search from a non-terminal state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<A> {
    /// First action in enumeration order achieving `value`.
    pub best_action: A,

    /// Game value under optimal play by both sides.
    pub value: Outcome,

    /// Value of every root action, in enumeration order.
    pub action_values: Vec<(A, Outcome)>,

    /// Number of states visited below the root.
    pub nodes: u64,
}

/// Exhaustive minimax search driver.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    /// Create a new search driver.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Get the search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search the full game tree below `state`.
    ///
    /// Returns `Ok(None)` if `state` is terminal.
    ///
    /// # Errors
    /// Propagates any error the game reports, such as a malformed state.
    pub fn search<G: Game>(
        &self,
        game: &G,
        state: &G::State,
    ) -> Result<Option<SearchResult<G::Action>>> {
        if game.terminal(state) {
            debug!("terminal state, no action to search");
            return Ok(None);
        }

        let polarity: Polarity = game.player(state)?.into();
        let actions = game.actions(state);

        let scored: Vec<(G::Action, i8, u64)> = if self.config.parallel_root {
            actions
                .par_iter()
                .map(|&action| score_action(game, state, action, polarity))
                .collect::<Result<Vec<_>>>()?
        } else {
            actions
                .iter()
                .map(|&action| score_action(game, state, action, polarity))
                .collect::<Result<Vec<_>>>()?
        };

        let mut best_action = None;
        let mut best_score = polarity.initial_bound();
        let mut action_values = Vec::with_capacity(scored.len());
        let mut nodes = 0;

        for (action, score, subtree) in scored {
            trace!(?action, score, subtree, "scored root action");
            nodes += subtree;
            if polarity.improves(score, best_score) {
                best_score = score;
                best_action = Some(action);
            }
            action_values.push((action, Outcome::from_score(score)?));
        }

        // A non-terminal state with no actions has nothing to choose from.
        let Some(best_action) = best_action else {
            return Ok(None);
        };
        let value = Outcome::from_score(best_score)?;

        debug!(?polarity, ?best_action, %value, nodes, "minimax decision");

        Ok(Some(SearchResult {
            best_action,
            value,
            action_values,
            nodes,
        }))
    }

    /// The optimal action for the player to move, or `None` if `state` is
    /// terminal.
    pub fn best_action<G: Game>(&self, game: &G, state: &G::State) -> Result<Option<G::Action>> {
        Ok(self
            .search(game, state)?
            .map(|result| result.best_action))
    }

    /// Game value of any state under optimal play.
    ///
    /// Terminal states return their utility.
    pub fn value<G: Game>(&self, game: &G, state: &G::State) -> Result<Outcome> {
        match self.search(game, state)? {
            Some(result) => Ok(result.value),
            None => game.utility(state),
        }
    }

    /// The line of best actions from `state` to the end of the game.
    pub fn principal_variation<G: Game>(
        &self,
        game: &G,
        state: &G::State,
    ) -> Result<Vec<G::Action>> {
        let mut line = Vec::new();
        let mut current = state.clone();
        while let Some(action) = self.best_action(game, &current)? {
            current = game.result(&current, action)?;
            line.push(action);
        }
        Ok(line)
    }
}

/// Score one root action: apply it and search the child with the opposing
/// polarity. Returns the action, its score and the size of its subtree.
fn score_action<G: Game>(
    game: &G,
    state: &G::State,
    action: G::Action,
    polarity: Polarity,
) -> Result<(G::Action, i8, u64)> {
    let child = game.result(state, action)?;
    let mut nodes = 1;
    let score = search_value(game, &child, polarity.opposite(), &mut nodes)?;
    Ok((action, score, nodes))
}

fn search_value<G: Game>(
    game: &G,
    state: &G::State,
    polarity: Polarity,
    nodes: &mut u64,
) -> Result<i8> {
    if game.terminal(state) {
        return Ok(game.utility(state)?.score());
    }

    let mut best = polarity.initial_bound();
    for action in game.actions(state) {
        let child = game.result(state, action)?;
        *nodes += 1;
        let score = search_value(game, &child, polarity.opposite(), nodes)?;
        if polarity.improves(score, best) {
            best = score;
        }
    }
    Ok(best)
}

/// Score `state` for a player of the given polarity, assuming optimal
/// replies. Returns the utility directly for terminal states.
///
/// # Errors
/// Propagates any error the game reports.
pub fn value<G: Game>(game: &G, state: &G::State, polarity: Polarity) -> Result<i8> {
    let mut nodes = 0;
    search_value(game, state, polarity, &mut nodes)
}

/// Best score the maximizing player (X) can force from `state`.
pub fn maximize_value<G: Game>(game: &G, state: &G::State) -> Result<i8> {
    value(game, state, Polarity::Maximize)
}

/// Best score the minimizing player (O) can force from `state`.
pub fn minimize_value<G: Game>(game: &G, state: &G::State) -> Result<i8> {
    value(game, state, Polarity::Minimize)
}

/// The optimal action for the player to move, or `None` on a terminal state.
///
/// Uses the default sequential configuration.
pub fn minimax<G: Game>(game: &G, state: &G::State) -> Result<Option<G::Action>> {
    Minimax::default().best_action(game, state)
}
