//! Tic-tac-toe: 3x3 board, three in a row wins.

use std::fmt;

use crate::game::{GameMove, GameState, Outcome, Player, WIN_SCORE};
use crate::{Error, Result};

/// The eight winning lines of the 3x3 board
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A tic-tac-toe move: a cell index in `[0, 9)`, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(pub usize);

impl GameMove for Cell {
    fn id(&self) -> usize {
        self.0
    }
}

/// Tic-tac-toe game state
///
/// The board is a flat 3x3 grid indexed `row * 3 + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    cells: [Option<Player>; 9],
    to_move: Player,
    moves_played: usize,
}

impl TicTacToe {
    /// Creates an empty board with `X` to move
    pub fn new() -> Self {
        TicTacToe {
            cells: [None; 9],
            to_move: Player::X,
            moves_played: 0,
        }
    }

    /// Returns the mark at the given cell, if any
    pub fn cell(&self, index: usize) -> Option<Player> {
        self.cells[index]
    }

    fn winner(&self) -> Option<Player> {
        for line in &LINES {
            if let Some(p) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(p) && self.cells[line[2]] == Some(p) {
                    return Some(p);
                }
            }
        }
        None
    }

    /// Counts lines that `player` could still complete (no opponent mark)
    fn open_lines(&self, player: Player) -> usize {
        LINES
            .iter()
            .filter(|line| {
                line.iter()
                    .all(|&i| self.cells[i].map_or(true, |mark| mark == player))
            })
            .count()
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for TicTacToe {
    type Move = Cell;

    fn legal_moves(&self) -> Vec<Cell> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..9)
            .filter(|&i| self.cells[i].is_none())
            .map(Cell)
            .collect()
    }

    fn apply(&self, mv: Cell) -> Result<Self> {
        if mv.0 >= 9 || self.cells[mv.0].is_some() || self.is_terminal() {
            return Err(Error::IllegalMove(mv.0));
        }

        let mut next = self.clone();
        next.cells[mv.0] = Some(self.to_move);
        next.to_move = self.to_move.other();
        next.moves_played = self.moves_played + 1;
        Ok(next)
    }

    fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(p) => Outcome::Win(p),
            None if self.moves_played == 9 => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }

    fn to_move(&self) -> Player {
        self.to_move
    }

    fn heuristic(&self, perspective: Player) -> f64 {
        match self.outcome() {
            Outcome::Win(p) if p == perspective => WIN_SCORE,
            Outcome::Win(_) => -WIN_SCORE,
            Outcome::Draw => 0.0,
            // Open-line differential, bounded by the 8 lines of the board.
            Outcome::Ongoing => {
                self.open_lines(perspective) as f64 - self.open_lines(perspective.other()) as f64
            }
        }
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2")?;
        for row in 0..3 {
            write!(f, "{} ", row)?;
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Some(Player::X) => "X",
                    Some(Player::O) => "O",
                    None => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
