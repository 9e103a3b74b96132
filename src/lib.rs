//! # ludus
//!
//! Game-tree search agents for small zero-sum, perfect-information games.
//!
//! This crate provides two move-selection algorithms over a shared game-state
//! abstraction:
//!
//! - [`AlphaBetaSearcher`]: depth-limited minimax with alpha-beta pruning
//! - [`MctsSearcher`]: iteration-budgeted Monte Carlo Tree Search with UCT
//!   selection
//!
//! Two games implement the abstraction out of the box: [`TicTacToe`]
//! (3x3, three in a row) and [`ConnectFour`] (6x7, four in a row with
//! gravity). Both searchers return the chosen move together with a
//! per-candidate evaluation table, so a caller can display or log how the
//! decision was reached.
//!
//! ## Basic usage
//!
//! ```
//! use ludus::{AlphaBetaSearcher, MctsConfig, MctsSearcher, GameState, TicTacToe};
//!
//! fn main() -> ludus::Result<()> {
//!     let state = TicTacToe::new();
//!
//!     // Exhaustive search: tic-tac-toe from the empty board is a draw.
//!     let minimax = AlphaBetaSearcher::new(9)?;
//!     let (mv, evals) = minimax.choose_move(&state)?;
//!     println!("minimax plays {:?} ({} candidates)", mv, evals.len());
//!
//!     // Sampled search with a fixed seed for reproducibility.
//!     let config = MctsConfig::default()
//!         .with_iterations(500)
//!         .with_seed(42);
//!     let mut mcts = MctsSearcher::new(config)?;
//!     let (mv, _evals) = mcts.choose_move(&state)?;
//!     println!("mcts plays {:?}", mv);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Picking an agent at runtime
//!
//! The [`MoveSelector`] façade dispatches on an [`AgentConfig`] and returns a
//! uniform result shape regardless of which algorithm ran:
//!
//! ```
//! use ludus::{AgentConfig, GameState, MoveSelector, TicTacToe};
//!
//! let state = TicTacToe::new();
//! let config = AgentConfig::Minimax { max_depth: 3 };
//! let (mv, evals) = MoveSelector::choose_move(&state, &config).unwrap();
//! assert!(state.legal_moves().contains(&mv));
//! assert_eq!(evals.len(), 9);
//! ```
//!
//! ## Scope
//!
//! Both searches are single-threaded and blocking: a `choose_move` call runs
//! to completion before returning, and each call owns its search state
//! exclusively. MCTS builds a fresh tree per decision and discards it after
//! the move is chosen. The crate has no file, network, or process-environment
//! surface; game loops, prompts, and result logging belong to the caller.

pub mod config;
pub mod game;
pub mod games;
pub mod mcts;
pub mod minimax;
pub mod rollout;
pub mod selector;
pub mod stats;
pub mod tree;

pub use config::MctsConfig;
pub use game::{GameMove, GameState, Outcome, Player, WIN_SCORE};
pub use games::{Cell, Column, ConnectFour, TicTacToe};
pub use mcts::MctsSearcher;
pub use minimax::AlphaBetaSearcher;
pub use rollout::{RolloutPolicy, UniformRollout, WinBiasedRollout};
pub use selector::{AgentConfig, MoveEvaluation, MoveSelector};
pub use stats::SearchStatistics;
pub use tree::{NodePath, SearchNode};

/// Error types shared by the game abstraction and both searchers
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Move is not among the legal moves of the state it was applied to.
    /// Recoverable by the caller (re-prompt or reject); never fatal.
    #[error("Illegal move {0} for the current state")]
    IllegalMove(usize),

    /// Non-positive depth or iteration budget. Indicates a configuration
    /// mistake upstream and is never retried internally.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// `choose_move` was invoked on an already-terminal state.
    #[error("No legal moves available from current state")]
    NoLegalMoves,
}

/// Result type for all fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;
