//! Iteration-budgeted Monte Carlo Tree Search.
//!
//! One move decision runs the four MCTS phases (selection, expansion,
//! simulation, backpropagation) exactly `iterations` times over a tree built
//! fresh from the given state, then picks the root child with the most
//! visits (robust-child selection).

use std::time::Instant;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::MctsConfig;
use crate::game::{GameState, Outcome};
use crate::rollout::{RolloutPolicy, UniformRollout};
use crate::selector::MoveEvaluation;
use crate::stats::SearchStatistics;
use crate::tree::{NodePath, SearchNode};
use crate::{Error, Result};

/// Calculates the UCT value of a child
///
/// ```text
/// UCT = mean_value + C * sqrt(ln(parent_visits) / child_visits)
/// ```
///
/// Unvisited children score infinity so they are always tried before any
/// visited sibling is revisited.
fn uct_value(mean_value: f64, child_visits: u64, parent_visits: u64, exploration: f64) -> f64 {
    if child_visits == 0 {
        return f64::INFINITY;
    }
    mean_value + exploration * ((parent_visits as f64).ln() / child_visits as f64).sqrt()
}

/// The Monte Carlo Tree Search move selector
///
/// Owns its configuration and random source; each [`choose_move`] call owns
/// its search tree exclusively and discards it before returning.
///
/// [`choose_move`]: MctsSearcher::choose_move
pub struct MctsSearcher<S: GameState + 'static> {
    /// Configuration for the search
    config: MctsConfig,

    /// Policy used to play out games during the simulation phase
    rollout_policy: Box<dyn RolloutPolicy<S>>,

    /// Random source for rollouts; seeded per [`MctsConfig::seed`]
    rng: StdRng,

    /// Statistics gathered during the most recent search
    statistics: SearchStatistics,
}

impl<S: GameState + 'static> MctsSearcher<S> {
    /// Creates a new searcher with the given configuration
    ///
    /// Fails with [`Error::InvalidConfig`] if the iteration budget is zero
    /// or the exploration constant is unusable. The default rollout policy
    /// is [`UniformRollout`].
    pub fn new(config: MctsConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(MctsSearcher {
            config,
            rollout_policy: Box::new(UniformRollout::new()),
            rng,
            statistics: SearchStatistics::new(),
        })
    }

    /// Sets the rollout policy to use
    pub fn with_rollout_policy<P: RolloutPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.rollout_policy = Box::new(policy);
        self
    }

    /// Runs the search and returns the chosen move with the per-candidate
    /// evaluation table
    ///
    /// Fails with [`Error::NoLegalMoves`] if `state` is terminal. The chosen
    /// move is the root child with the most visits; ties break to the
    /// first-encountered child in expansion order. The evaluation table
    /// lists every root child with its empirical mean value and visit count.
    pub fn choose_move(&mut self, state: &S) -> Result<(S::Move, Vec<MoveEvaluation<S::Move>>)> {
        if state.is_terminal() {
            return Err(Error::NoLegalMoves);
        }

        self.statistics = SearchStatistics::new();
        let mut root = SearchNode::new(state.clone(), None, None, 0);
        let start = Instant::now();

        for i in 0..self.config.iterations {
            self.execute_iteration(&mut root)?;
            self.statistics.iterations = i + 1;

            // The cutoff is checked between iterations, so at least one
            // iteration always completes and none is interrupted mid-flight.
            if let Some(max_time) = self.config.max_time {
                if start.elapsed() >= max_time && i + 1 < self.config.iterations {
                    self.statistics.stopped_early = true;
                    debug!(
                        "search stopped after {} of {} iterations (time limit)",
                        i + 1,
                        self.config.iterations
                    );
                    break;
                }
            }
        }

        self.statistics.total_time = start.elapsed();
        debug!(
            "search finished: {} iterations, {} nodes, depth {}",
            self.statistics.iterations, self.statistics.tree_size, self.statistics.max_depth
        );

        Self::select_best(&root)
    }

    /// Returns the statistics of the most recent search
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Executes a single iteration of the MCTS algorithm
    fn execute_iteration(&mut self, root: &mut SearchNode<S>) -> Result<()> {
        // 1. Selection: descend while fully expanded and non-terminal.
        let selected = self.selection(root);

        // 2. Expansion: attach a child for the first untried move.
        let (expanded, leaf_state) = self.expansion(root, &selected);

        // 3. Simulation: play out to a terminal state. A terminal leaf
        //    skips the playout and contributes its own outcome.
        let outcome = self
            .rollout_policy
            .rollout(&leaf_state, &mut self.rng)?;

        // 4. Backpropagation: credit every node on the path.
        Self::backpropagation(root, &expanded, outcome);

        Ok(())
    }

    /// Selection phase: walk down to a node that still has untried moves
    /// or is terminal
    fn selection(&mut self, root: &SearchNode<S>) -> NodePath {
        let mut path = NodePath::new();
        let mut current = root;

        while !current.state.is_terminal()
            && current.is_fully_expanded()
            && !current.children.is_empty()
        {
            let best_child = self.select_child(current);
            path.push(best_child);
            current = &current.children[best_child];

            self.statistics.max_depth = self.statistics.max_depth.max(path.len());
        }

        trace!("selected {}", path);
        path
    }

    /// Picks the child maximizing UCT; ties break to the first-encountered
    /// child in expansion order
    fn select_child(&self, node: &SearchNode<S>) -> usize {
        let parent_visits = node.visits;
        let mut best_value = f64::NEG_INFINITY;
        let mut best_index = 0;

        for (i, child) in node.children.iter().enumerate() {
            let uct = uct_value(
                child.mean_value(),
                child.visits,
                parent_visits,
                self.config.exploration_constant,
            );
            if uct > best_value {
                best_value = uct;
                best_index = i;
            }
        }

        best_index
    }

    /// Expansion phase: create a child for the selected node's first untried
    /// move and return the extended path plus the state to simulate from
    fn expansion(&mut self, root: &mut SearchNode<S>, path: &NodePath) -> (NodePath, S) {
        let mut node = &mut *root;
        for &index in &path.indices {
            node = &mut node.children[index];
        }

        let mut expanded = path.clone();

        // Terminal nodes are never expanded; their outcome backpropagates
        // directly.
        if !node.state.is_terminal() {
            if let Some(child_index) = node.expand_next() {
                expanded.push(child_index);
                self.statistics.tree_size += 1;
                self.statistics.max_depth = self.statistics.max_depth.max(expanded.len());
                return (expanded, node.children[child_index].state.clone());
            }
        }

        (expanded, node.state.clone())
    }

    /// Backpropagation phase: from the root down the recorded path, add one
    /// visit and the outcome's reward from each node's own perspective
    fn backpropagation(root: &mut SearchNode<S>, path: &NodePath, outcome: Outcome) {
        let mut node = &mut *root;
        node.visits += 1;
        node.value_sum += outcome.reward_for(node.player);

        for &index in &path.indices {
            node = &mut node.children[index];
            node.visits += 1;
            node.value_sum += outcome.reward_for(node.player);
        }
    }

    /// Robust-child selection: the move of the most-visited root child
    ///
    /// Visit counts are a steadier signal than mean values at low sample
    /// sizes, so the most-visited child is chosen rather than the
    /// highest-mean child.
    fn select_best(root: &SearchNode<S>) -> Result<(S::Move, Vec<MoveEvaluation<S::Move>>)> {
        if root.children.is_empty() {
            return Err(Error::NoLegalMoves);
        }

        let mut best_visits = 0;
        let mut best_index = 0;
        for (i, child) in root.children.iter().enumerate() {
            if child.visits > best_visits {
                best_visits = child.visits;
                best_index = i;
            }
        }

        let evaluations = root
            .children
            .iter()
            .map(|child| {
                child
                    .mv
                    .map(|mv| MoveEvaluation {
                        mv,
                        score: child.mean_value(),
                        visits: Some(child.visits),
                    })
                    .ok_or(Error::NoLegalMoves)
            })
            .collect::<Result<Vec<_>>>()?;

        let chosen = root.children[best_index].mv.ok_or(Error::NoLegalMoves)?;
        Ok((chosen, evaluations))
    }
}
