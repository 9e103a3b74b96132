//! Agent dispatch façade.
//!
//! [`MoveSelector`] hides which search algorithm produced a move: the game
//! loop supplies an [`AgentConfig`] and a state, and receives the chosen
//! move plus a uniform evaluation table either way.

use crate::config::MctsConfig;
use crate::game::GameState;
use crate::mcts::MctsSearcher;
use crate::minimax::AlphaBetaSearcher;
use crate::Result;

/// One row of the evaluation table returned alongside a chosen move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveEvaluation<M> {
    /// The candidate move
    pub mv: M,

    /// The searcher's score for the move: the exact minimax value for
    /// alpha-beta, the empirical mean reward for MCTS
    pub score: f64,

    /// Visit count of the candidate; `Some` for MCTS, `None` for minimax
    pub visits: Option<u64>,
}

/// Which algorithm decides the move, with its search budget
#[derive(Debug, Clone)]
pub enum AgentConfig {
    /// Depth-limited alpha-beta minimax
    Minimax {
        /// Maximum search depth in plies; must be at least 1
        max_depth: usize,
    },
    /// Iteration-budgeted Monte Carlo Tree Search
    Mcts(MctsConfig),
}

/// Dispatches a move decision to the configured searcher
pub struct MoveSelector;

impl MoveSelector {
    /// Chooses a move for `state` using the agent described by `config`
    ///
    /// MCTS builds its tree fresh for the call, so consecutive calls share
    /// no search state. Errors surface unchanged from the underlying
    /// searcher: `InvalidConfig` for a bad budget, `NoLegalMoves` for a
    /// terminal state.
    pub fn choose_move<S: GameState + 'static>(
        state: &S,
        config: &AgentConfig,
    ) -> Result<(S::Move, Vec<MoveEvaluation<S::Move>>)> {
        match config {
            AgentConfig::Minimax { max_depth } => {
                AlphaBetaSearcher::new(*max_depth)?.choose_move(state)
            }
            AgentConfig::Mcts(mcts_config) => {
                MctsSearcher::new(mcts_config.clone())?.choose_move(state)
            }
        }
    }
}
