//! Tree data structures for Monte Carlo Tree Search.
//!
//! The tree is held by owning forward edges: a parent owns its children, and
//! upward traversal during backpropagation walks a [`NodePath`] of child
//! indices from the root instead of following parent pointers. A fresh tree
//! is built per move decision and discarded once the move is chosen.

use std::fmt;

use crate::game::{GameState, Player};

/// A node in the MCTS tree
///
/// Each node carries the game state it represents, the move that led to it,
/// visit/reward statistics, and the legal moves not yet expanded into
/// children. Moves migrate from `untried_moves` to `children` in legal-move
/// order as the search progresses.
pub struct SearchNode<S: GameState> {
    /// The game state at this node
    pub state: S,

    /// The move that led to this state (`None` for the root)
    pub mv: Option<S::Move>,

    /// The player who made `mv`; for the root, the side to move.
    /// Rewards accumulated here are from this player's perspective, which is
    /// the perspective of the player to move at the parent.
    pub player: Player,

    /// Number of times this node was visited during backpropagation
    pub visits: u64,

    /// Accumulated reward from simulations through this node
    pub value_sum: f64,

    /// Child nodes, in the order they were expanded
    pub children: Vec<SearchNode<S>>,

    /// Legal moves not yet expanded into children, in legal-move order
    pub untried_moves: Vec<S::Move>,

    /// Depth of this node in the tree (root = 0)
    pub depth: usize,
}

impl<S: GameState> SearchNode<S> {
    /// Creates a new node for `state`
    ///
    /// `mover` is the player who made the move leading here; the root passes
    /// `None` and falls back to the side to move.
    pub fn new(state: S, mv: Option<S::Move>, mover: Option<Player>, depth: usize) -> Self {
        let player = mover.unwrap_or_else(|| state.to_move());
        let untried_moves = state.legal_moves();

        SearchNode {
            state,
            mv,
            player,
            visits: 0,
            value_sum: 0.0,
            children: Vec::new(),
            untried_moves,
            depth,
        }
    }

    /// Returns the empirical mean reward of this node, 0.0 before any visit
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            return 0.0;
        }
        self.value_sum / self.visits as f64
    }

    /// Returns true if every legal move has been expanded into a child
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_moves.is_empty()
    }

    /// Expands the first untried move into a child node
    ///
    /// The move is taken from the front of `untried_moves`, keeping expansion
    /// order deterministic (ascending move index, since that is how legal
    /// moves are generated). Returns the index of the new child, or `None`
    /// if the node has no untried moves or the move fails to apply.
    pub fn expand_next(&mut self) -> Option<usize> {
        if self.untried_moves.is_empty() {
            return None;
        }

        let mv = self.untried_moves.remove(0);
        let next_state = self.state.apply(mv).ok()?;
        let mover = self.state.to_move();

        self.children
            .push(SearchNode::new(next_state, Some(mv), Some(mover), self.depth + 1));
        Some(self.children.len() - 1)
    }
}

/// A path through the MCTS tree
///
/// A sequence of child indices leading from the root to a specific node.
/// Backpropagation replays the path from the root, updating every node it
/// passes through.
#[derive(Debug, Clone, Default)]
pub struct NodePath {
    /// Indices of children to follow from the root
    pub indices: Vec<usize>,
}

impl NodePath {
    /// Creates a new empty path (pointing at the root)
    pub fn new() -> Self {
        NodePath {
            indices: Vec::new(),
        }
    }

    /// Extends the path with a child index
    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    /// Returns the length of the path
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the path is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path[")?;
        for (i, idx) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", idx)?;
        }
        write!(f, "]")
    }
}
