//! The game-state abstraction shared by both searchers.
//!
//! The [`GameState`] trait is the interface a game must implement to be
//! played by [`AlphaBetaSearcher`](crate::AlphaBetaSearcher) and
//! [`MctsSearcher`](crate::MctsSearcher). States are immutable as far as the
//! searchers are concerned: applying a move produces a new state, never
//! mutates the old one.

use std::fmt::Debug;

use crate::Result;

/// Magnitude of a decided (won or lost) position.
///
/// Terminal scores produced by the searchers and by [`GameState::heuristic`]
/// use this value; non-terminal heuristic estimates must stay strictly below
/// it in magnitude so that a guaranteed win always outranks a merely
/// favorable position.
pub const WIN_SCORE: f64 = 1_000.0;

/// The two players of a zero-sum, alternating-turn game.
///
/// `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the opponent of this player
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// The result of a game as seen from a single state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game is still in progress
    Ongoing,
    /// The board is full (or otherwise exhausted) with no winner
    Draw,
    /// The given player has completed a winning line
    Win(Player),
}

impl Outcome {
    /// Scalar reward of this outcome from `player`'s perspective:
    /// +1 for a win, -1 for a loss, 0 for a draw or an ongoing game.
    pub fn reward_for(self, player: Player) -> f64 {
        match self {
            Outcome::Win(winner) if winner == player => 1.0,
            Outcome::Win(_) => -1.0,
            Outcome::Draw | Outcome::Ongoing => 0.0,
        }
    }
}

/// Trait for moves that can be played in a game
///
/// Moves are small copyable tokens: a cell index for tic-tac-toe, a column
/// index for connect four.
pub trait GameMove: Copy + Eq + Debug + Send + Sync {
    /// Returns the numeric identifier of this move (cell or column index)
    fn id(&self) -> usize;
}

/// Trait defining the game-state interface required by the searchers
///
/// Implementations must keep move generation deterministic (ascending
/// cell/column index) so that searches are reproducible: minimax visits
/// children in a fixed order and seeded MCTS runs are bit-identical.
pub trait GameState: Clone + Send + Sync {
    /// The type of moves that can be played in this game
    type Move: GameMove;

    /// Returns the legal moves from this state, in ascending index order
    ///
    /// The returned list is empty if and only if the state is terminal.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Applies a legal move, returning the successor state
    ///
    /// The mark is placed and the turn flips; the original state is left
    /// untouched. Fails with [`Error::IllegalMove`](crate::Error::IllegalMove)
    /// if `mv` is not among [`legal_moves`](Self::legal_moves), including any
    /// move applied to a terminal state.
    fn apply(&self, mv: Self::Move) -> Result<Self>;

    /// Returns the outcome of this state
    ///
    /// `Ongoing` until a winning line exists for one player or the board is
    /// full with no line (`Draw`).
    fn outcome(&self) -> Outcome;

    /// Returns true if the game is over in this state
    fn is_terminal(&self) -> bool {
        self.outcome() != Outcome::Ongoing
    }

    /// Returns the player whose turn it is in this state
    fn to_move(&self) -> Player;

    /// Returns a bounded estimate of how favorable this state is for
    /// `perspective`
    ///
    /// Used by [`AlphaBetaSearcher`](crate::AlphaBetaSearcher) when the depth
    /// budget runs out before terminality. For terminal states the estimate
    /// must agree in sign with [`outcome`](Self::outcome): `+WIN_SCORE` for a
    /// win, `-WIN_SCORE` for a loss, `0.0` for a draw. Non-terminal estimates
    /// must stay strictly below [`WIN_SCORE`] in magnitude.
    fn heuristic(&self, perspective: Player) -> f64;
}
