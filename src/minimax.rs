//! Depth-limited minimax with alpha-beta pruning.
//!
//! The searcher is exhaustive within its depth budget and fully
//! deterministic: children are visited in legal-move order and ties among
//! equal-best scores break to the first-encountered move. Repeated calls
//! with the same state and depth return identical results.

use log::debug;

use crate::game::{GameState, Outcome, Player, WIN_SCORE};
use crate::selector::MoveEvaluation;
use crate::{Error, Result};

/// The alpha-beta minimax move selector
#[derive(Debug, Clone)]
pub struct AlphaBetaSearcher {
    max_depth: usize,
}

impl AlphaBetaSearcher {
    /// Creates a new searcher with the given depth budget
    ///
    /// Fails with [`Error::InvalidConfig`] if `max_depth` is zero.
    pub fn new(max_depth: usize) -> Result<Self> {
        if max_depth < 1 {
            return Err(Error::InvalidConfig(
                "minimax depth must be at least 1".to_string(),
            ));
        }
        Ok(AlphaBetaSearcher { max_depth })
    }

    /// Returns the configured depth budget
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Searches the state and returns the best move with the per-candidate
    /// score table
    ///
    /// Fails with [`Error::NoLegalMoves`] if `state` is terminal. Each root
    /// candidate is searched with a fresh full (-inf, +inf) window so that
    /// every score in the returned table is its exact minimax value rather
    /// than a pruning bound; pruning applies below the root, where only the
    /// subtree value matters.
    pub fn choose_move<S: GameState>(
        &self,
        state: &S,
    ) -> Result<(S::Move, Vec<MoveEvaluation<S::Move>>)> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMoves);
        }

        let max_player = state.to_move();
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = moves[0];
        let mut evaluations = Vec::with_capacity(moves.len());

        for mv in moves {
            let child = state.apply(mv)?;
            let score = self.minimax(
                &child,
                self.max_depth - 1,
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
                max_player,
            )?;

            // Strict comparison keeps the first-encountered move on ties.
            if score > best_score {
                best_score = score;
                best_move = mv;
            }

            evaluations.push(MoveEvaluation {
                mv,
                score,
                visits: None,
            });
        }

        debug!(
            "minimax depth {} chose {:?} (score {:.1})",
            self.max_depth, best_move, best_score
        );
        Ok((best_move, evaluations))
    }

    /// Recursive alpha-beta search
    ///
    /// Returns the value of `state` for `max_player`. Terminal states score
    /// `+-(WIN_SCORE + depth)`, so wins found higher in the tree (more depth
    /// remaining) outrank deeper ones and every decided position strictly
    /// dominates any heuristic estimate.
    fn minimax<S: GameState>(
        &self,
        state: &S,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        max_player: Player,
    ) -> Result<f64> {
        match state.outcome() {
            Outcome::Win(winner) => {
                let magnitude = WIN_SCORE + depth as f64;
                return Ok(if winner == max_player {
                    magnitude
                } else {
                    -magnitude
                });
            }
            Outcome::Draw => return Ok(0.0),
            Outcome::Ongoing => {}
        }

        if depth == 0 {
            return Ok(state.heuristic(max_player));
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in state.legal_moves() {
                let child = state.apply(mv)?;
                let score = self.minimax(&child, depth - 1, alpha, beta, false, max_player)?;
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break; // beta cutoff
                }
            }
            Ok(best)
        } else {
            let mut best = f64::INFINITY;
            for mv in state.legal_moves() {
                let child = state.apply(mv)?;
                let score = self.minimax(&child, depth - 1, alpha, beta, true, max_player)?;
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break; // alpha cutoff
                }
            }
            Ok(best)
        }
    }
}
