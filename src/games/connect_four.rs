//! Connect four: 6x7 board, four in a row wins, pieces drop to the lowest
//! empty row of their column.

use std::fmt;

use crate::game::{GameMove, GameState, Outcome, Player, WIN_SCORE};
use crate::{Error, Result};

/// Number of rows on the board
pub const ROWS: usize = 6;
/// Number of columns on the board
pub const COLS: usize = 7;

/// The four directions a winning window can run in: right, up, up-right,
/// up-left (as `(row, col)` deltas from the window's first cell)
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A connect-four move: a column index in `[0, 7)`
///
/// The state resolves the column to the lowest empty row; the row is never
/// part of the move itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column(pub usize);

impl GameMove for Column {
    fn id(&self) -> usize {
        self.0
    }
}

/// Connect-four game state
///
/// Cells are stored flat, indexed `row * COLS + col`, with row 0 at the
/// bottom of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectFour {
    cells: [Option<Player>; ROWS * COLS],
    to_move: Player,
    moves_played: usize,
}

impl ConnectFour {
    /// Creates an empty board with `X` to move
    pub fn new() -> Self {
        ConnectFour {
            cells: [None; ROWS * COLS],
            to_move: Player::X,
            moves_played: 0,
        }
    }

    /// Returns the mark at the given row and column, if any
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row * COLS + col]
    }

    /// Returns the lowest empty row of `col`, or `None` if the column is full
    fn drop_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).find(|&row| self.cells[row * COLS + col].is_none())
    }

    fn winner(&self) -> Option<Player> {
        for row in 0..ROWS as isize {
            for col in 0..COLS as isize {
                let Some(p) = self.cells[row as usize * COLS + col as usize] else {
                    continue;
                };
                for (dr, dc) in DIRECTIONS {
                    let (end_r, end_c) = (row + 3 * dr, col + 3 * dc);
                    if !(0..ROWS as isize).contains(&end_r) || !(0..COLS as isize).contains(&end_c)
                    {
                        continue;
                    }
                    if (1..4).all(|k| {
                        self.cells[(row + k * dr) as usize * COLS + (col + k * dc) as usize]
                            == Some(p)
                    }) {
                        return Some(p);
                    }
                }
            }
        }
        None
    }

    /// Counts length-4 windows that `player` could still complete
    /// (windows containing no opponent mark)
    fn open_windows(&self, player: Player) -> usize {
        let mut count = 0;
        for row in 0..ROWS as isize {
            for col in 0..COLS as isize {
                for (dr, dc) in DIRECTIONS {
                    let (end_r, end_c) = (row + 3 * dr, col + 3 * dc);
                    if !(0..ROWS as isize).contains(&end_r) || !(0..COLS as isize).contains(&end_c)
                    {
                        continue;
                    }
                    if (0..4).all(|k| {
                        self.cells[(row + k * dr) as usize * COLS + (col + k * dc) as usize]
                            .map_or(true, |mark| mark == player)
                    }) {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for ConnectFour {
    type Move = Column;

    fn legal_moves(&self) -> Vec<Column> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| self.drop_row(col).is_some())
            .map(Column)
            .collect()
    }

    fn apply(&self, mv: Column) -> Result<Self> {
        if mv.0 >= COLS || self.is_terminal() {
            return Err(Error::IllegalMove(mv.0));
        }
        let row = self.drop_row(mv.0).ok_or(Error::IllegalMove(mv.0))?;

        let mut next = self.clone();
        next.cells[row * COLS + mv.0] = Some(self.to_move);
        next.to_move = self.to_move.other();
        next.moves_played = self.moves_played + 1;
        Ok(next)
    }

    fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(p) => Outcome::Win(p),
            None if self.moves_played == ROWS * COLS => Outcome::Draw,
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
            // Open-window differential; there are 69 windows on a 6x7 board,
            // so the estimate stays well inside WIN_SCORE.
            Outcome::Ongoing => {
                self.open_windows(perspective) as f64
                    - self.open_windows(perspective.other()) as f64
            }
        }
    }
}

impl fmt::Display for ConnectFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            write!(f, "|")?;
            for col in 0..COLS {
                let symbol = match self.cells[row * COLS + col] {
                    Some(Player::X) => "X",
                    Some(Player::O) => "O",
                    None => ".",
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f, " |")?;
        }
        write!(f, " ")?;
        for col in 0..COLS {
            write!(f, " {}", col)?;
        }
        writeln!(f)
    }
}
