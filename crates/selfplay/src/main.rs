//! Headless tic-tac-toe self-play and position solving.
//!
//! Plays optimal games (optionally after a seeded random opening) and
//! reports the minimax evaluation of arbitrary positions.

mod record;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use record::{play_game, GameRecord};
use tictactoe_board::{Board, TicTacToe};
use tictactoe_core::Game;
use tictactoe_minimax::{Minimax, SearchConfig};
use tracing_subscriber::EnvFilter;

/// Tic-tac-toe minimax self-play tool.
#[derive(Parser)]
#[command(name = "tictactoe-selfplay")]
#[command(about = "Play optimal tic-tac-toe games and solve positions")]
struct Cli {
    /// Tracing filter (e.g. "debug", "tictactoe_minimax=trace").
    /// Defaults to RUST_LOG, then "warn".
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game between two minimax players.
    Play {
        /// Starting board as nine cells, e.g. "XO./.X./..O" (default: empty).
        #[arg(short, long)]
        board: Option<String>,

        /// Number of uniformly random plies before optimal play starts.
        #[arg(short, long, default_value = "0")]
        random_plies: usize,

        /// Random seed for the opening.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Score root moves in parallel.
        #[arg(long)]
        parallel: bool,

        /// Print the game record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a position.
    Solve {
        /// Board as nine cells, e.g. "XO./.X./..O".
        #[arg(short, long)]
        board: String,

        /// Score root moves in parallel.
        #[arg(long)]
        parallel: bool,
    },
}

fn init_tracing(directive: Option<&str>) -> Result<()> {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{directive}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn parse_board(text: &str) -> Result<Board> {
    text.parse::<Board>()
        .with_context(|| format!("failed to parse board '{text}'"))
}

fn search_config(parallel: bool) -> SearchConfig {
    if parallel {
        SearchConfig::parallel()
    } else {
        SearchConfig::sequential()
    }
}

fn print_game(record: &GameRecord) {
    println!("Start (seed {}):", record.seed);
    println!("{}", record.start);
    for (ply, mv) in record.moves.iter().enumerate() {
        let how = match mv.value {
            Some(value) => format!("minimax, value {value}, {} nodes", mv.nodes),
            None => "random".to_string(),
        };
        println!("{}. {} plays {} ({how})", ply + 1, mv.player, mv.action);
        println!("{}", mv.board);
    }
    println!("Result: {}", record.outcome);
}

fn cmd_solve(board: Board, search: &Minimax) -> Result<()> {
    let game = TicTacToe;
    println!("{board}");

    let Some(result) = search.search(&game, &board)? else {
        println!("Game over: {}", game.utility(&board)?);
        return Ok(());
    };

    println!("To move: {}", game.player(&board)?);
    for (action, value) in &result.action_values {
        println!("  {action}: {value}");
    }
    println!("Best action: {}", result.best_action);
    println!("Value: {}", result.value);
    println!("Nodes: {}", result.nodes);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref())?;

    match cli.command {
        Commands::Play {
            board,
            random_plies,
            seed,
            parallel,
            json,
        } => {
            let start = match board {
                Some(text) => parse_board(&text)?,
                None => Board::new(),
            };
            let search = Minimax::new(search_config(parallel));
            let record = play_game(&search, start, random_plies, seed)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_game(&record);
            }
        }
        Commands::Solve { board, parallel } => {
            let board = parse_board(&board)?;
            cmd_solve(board, &Minimax::new(search_config(parallel)))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play_args() {
        let cli = Cli::parse_from([
            "tictactoe-selfplay",
            "--log",
            "debug",
            "play",
            "--random-plies",
            "2",
            "--seed",
            "5",
            "--json",
        ]);
        assert_eq!(cli.log.as_deref(), Some("debug"));
        match cli.command {
            Commands::Play {
                board,
                random_plies,
                seed,
                parallel,
                json,
            } => {
                assert!(board.is_none());
                assert_eq!(random_plies, 2);
                assert_eq!(seed, 5);
                assert!(!parallel);
                assert!(json);
            }
            Commands::Solve { .. } => panic!("expected play"),
        }
    }

    #[test]
    fn test_parse_board_error_has_context() {
        let err = parse_board("XX").unwrap_err();
        assert!(err.to_string().contains("failed to parse board 'XX'"));
    }

    #[test]
    fn test_solve_terminal_board() {
        let board = parse_board("XOX/XOO/OXX").unwrap();
        assert!(cmd_solve(board, &Minimax::default()).is_ok());
    }

    #[test]
    fn test_search_config() {
        assert!(search_config(true).parallel_root);
        assert!(!search_config(false).parallel_root);
    }
}
