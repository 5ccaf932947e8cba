//! Self-play game generation.

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tictactoe_board::{Action, Board, Player, TicTacToe};
use tictactoe_core::{Game, Outcome};
use tictactoe_minimax::Minimax;
use tracing::{debug, info};

/// A single ply in a game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoveRecord {
    /// Player who made the move.
    pub player: Player,

    /// Square that was marked.
    pub action: Action,

    /// True for random opening plies.
    pub random: bool,

    /// Minimax value of the position before the move (searched plies only).
    pub value: Option<Outcome>,

    /// States searched to choose the move (0 for random plies).
    pub nodes: u64,

    /// Board after the move.
    pub board: Board,
}

/// A complete game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameRecord {
    /// Starting position.
    pub start: Board,

    /// Seed used for the random opening.
    pub seed: u64,

    /// Every ply, in order.
    pub moves: Vec<MoveRecord>,

    /// Final result.
    pub outcome: Outcome,
}

/// Play a game from `start`: `random_plies` uniformly random moves, then
/// optimal play for both sides until the game ends.
pub fn play_game(
    search: &Minimax,
    start: Board,
    random_plies: usize,
    seed: u64,
) -> Result<GameRecord> {
    let game = TicTacToe;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = start;
    let mut moves = Vec::new();

    for _ in 0..random_plies {
        if game.terminal(&state) {
            break;
        }
        let player = game.player(&state)?;
        let action = *game
            .actions(&state)
            .choose(&mut rng)
            .context("non-terminal board has no empty square")?;
        state = game.result(&state, action)?;
        debug!(%player, %action, "random ply");
        moves.push(MoveRecord {
            player,
            action,
            random: true,
            value: None,
            nodes: 0,
            board: state,
        });
    }

    while let Some(result) = search.search(&game, &state)? {
        let player = game.player(&state)?;
        state = game.result(&state, result.best_action)?;
        moves.push(MoveRecord {
            player,
            action: result.best_action,
            random: false,
            value: Some(result.value),
            nodes: result.nodes,
            board: state,
        });
    }

    let outcome = game.utility(&state)?;
    info!(plies = moves.len(), %outcome, "game finished");

    Ok(GameRecord {
        start,
        seed,
        moves,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_game_draws() {
        let record = play_game(&Minimax::default(), Board::new(), 0, 0).unwrap();

        assert_eq!(record.outcome, Outcome::Draw);
        assert_eq!(record.moves.len(), 9);
        assert!(record.moves.iter().all(|m| !m.random));
        assert_eq!(record.moves[0].player, Player::X);
        assert_eq!(record.moves[0].nodes, 549_945);
    }

    #[test]
    fn test_random_opening_is_reproducible() {
        let search = Minimax::default();
        let a = play_game(&search, Board::new(), 3, 7).unwrap();
        let b = play_game(&search, Board::new(), 3, 7).unwrap();

        assert_eq!(a, b);
        assert!(a.moves[..3].iter().all(|m| m.random));
        assert!(a.moves[3..].iter().all(|m| !m.random));
    }

    #[test]
    fn test_searched_plies_keep_value() {
        let record = play_game(&Minimax::default(), Board::new(), 2, 11).unwrap();
        let predicted = record.moves[2].value.unwrap();
        assert_eq!(record.outcome, predicted);
    }

    #[test]
    fn test_terminal_start() {
        let start: Board = "XXX/OO./...".parse().unwrap();
        let record = play_game(&Minimax::default(), start, 4, 1).unwrap();
        assert!(record.moves.is_empty());
        assert_eq!(record.outcome, Outcome::XWins);
    }

    #[test]
    fn test_record_json() {
        let record = play_game(&Minimax::default(), "XOX/OXO/OX.".parse().unwrap(), 0, 0).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: GameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
