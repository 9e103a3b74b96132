//! Rollout (simulation) policies for the MCTS searcher.
//!
//! A rollout plays a game from a given state to a terminal state without
//! touching the tree, producing the [`Outcome`] that backpropagation turns
//! into per-node rewards.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::game::{GameState, Outcome};
use crate::Result;

/// Trait for policies that play out a game to a terminal state
pub trait RolloutPolicy<S: GameState>: Send + Sync {
    /// Plays from `state` to a terminal state and returns its outcome
    ///
    /// Called with an already-terminal state, this returns its outcome
    /// immediately.
    fn rollout(&self, state: &S, rng: &mut dyn RngCore) -> Result<Outcome>;
}

/// Uniformly random rollout
///
/// Plays uniformly random legal moves until the game ends.
#[derive(Debug, Clone, Default)]
pub struct UniformRollout;

impl UniformRollout {
    /// Creates a new uniform rollout policy
    pub fn new() -> Self {
        UniformRollout
    }
}

impl<S: GameState> RolloutPolicy<S> for UniformRollout {
    fn rollout(&self, state: &S, rng: &mut dyn RngCore) -> Result<Outcome> {
        let mut current = state.clone();

        loop {
            let moves = current.legal_moves();
            let Some(&mv) = moves.choose(rng) else {
                return Ok(current.outcome());
            };
            current = current.apply(mv)?;
        }
    }
}

/// Win-biased rollout
///
/// At every step, takes an immediately winning move when one exists
/// (first such move in legal-move order), otherwise plays uniformly at
/// random. Converges faster than [`UniformRollout`] on tactical positions at
/// the cost of one extra lookahead per step.
#[derive(Debug, Clone, Default)]
pub struct WinBiasedRollout;

impl WinBiasedRollout {
    /// Creates a new win-biased rollout policy
    pub fn new() -> Self {
        WinBiasedRollout
    }
}

impl<S: GameState> RolloutPolicy<S> for WinBiasedRollout {
    fn rollout(&self, state: &S, rng: &mut dyn RngCore) -> Result<Outcome> {
        let mut current = state.clone();

        loop {
            let moves = current.legal_moves();
            if moves.is_empty() {
                return Ok(current.outcome());
            }

            let mover = current.to_move();
            let mut winning = None;
            for &mv in &moves {
                let next = current.apply(mv)?;
                if next.outcome() == Outcome::Win(mover) {
                    winning = Some(next);
                    break;
                }
            }

            current = match winning {
                Some(next) => next,
                None => {
                    let Some(&mv) = moves.choose(rng) else {
                        return Ok(current.outcome());
                    };
                    current.apply(mv)?
                }
            };
        }
    }
}
