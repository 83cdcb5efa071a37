//! Exhaustive search engine for the 3x3 marks game: terminal detection,
//! full-depth adversarial search and the difficulty policy layered above it.

use rand::Rng;
use thiserror::Error;

/// Number of cells on the marks board.
pub const BOARD_CELLS: usize = 9;

/// Score of a won position from the winner's perspective.
pub const WIN_SCORE: i32 = 10;

/// High-value opening subset: center and corners, row-major indices.
pub const OPENING_CELLS: [usize; 5] = [0, 2, 4, 6, 8];

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
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

/// One side's mark.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Reason why a mark could not be placed on a position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotMarkReason {
    /// The cell index is not on the board.
    #[error("the cell index is out of bounds")]
    OutOfBounds,
    /// The cell already holds a mark.
    #[error("the cell is already occupied")]
    Occupied,
}

/// A full 3x3 board state, row-major. `Copy` so search branches work on
/// independent copies and no mutation escapes a recursive call.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Position {
    cells: [Option<Mark>; BOARD_CELLS],
}

impl Position {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The mark at the given cell, if any. Panics if `cell >= 9`.
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells[cell]
    }

    /// Place a mark, rejecting out-of-bounds and occupied cells.
    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<(), CannotMarkReason> {
        match self.cells.get(cell) {
            None => Err(CannotMarkReason::OutOfBounds),
            Some(Some(_)) => Err(CannotMarkReason::Occupied),
            Some(None) => {
                self.cells[cell] = Some(mark);
                Ok(())
            }
        }
    }

    /// Iterate the empty cells in ascending index order. This order is part
    /// of the search contract: ties are broken by the first cell encountered.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| if cell.is_none() { Some(idx) } else { None })
    }

    /// Number of empty cells.
    pub fn remaining(&self) -> usize {
        self.empty_cells().count()
    }

    /// Whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Report the side owning a completed triple, if any. Pure and callable
    /// on partially filled boards.
    pub fn winner(&self) -> Option<Mark> {
        for line in &LINES {
            if let Some(mark) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(mark) && self.cells[line[2]] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }
}

/// Full-depth adversarial search. Returns the position's value from the
/// perspective of `to_move` (+10 win, -10 loss, 0 draw) and the best cell, or
/// `None` when the position is terminal.
///
/// Values are negated on recursion rather than scored per fixed side; with
/// ties broken by the first empty cell in ascending order, the chosen move
/// matches the fixed-side formulation exactly.
pub fn search(position: &Position, to_move: Mark) -> (i32, Option<usize>) {
    if let Some(winner) = position.winner() {
        let value = if winner == to_move {
            WIN_SCORE
        } else {
            -WIN_SCORE
        };
        return (value, None);
    }
    if position.is_full() {
        return (0, None);
    }

    let mut best_value = -WIN_SCORE - 1;
    let mut best_cell = None;
    for cell in position.empty_cells() {
        let mut child = *position;
        child.cells[cell] = Some(to_move);
        let (value, _) = search(&child, to_move.opponent());
        let value = -value;
        if value > best_value {
            best_value = value;
            best_cell = Some(cell);
        }
    }
    (best_value, best_cell)
}

/// Difficulty tier of a computer move source.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Difficulty {
    /// Uniform random over the empty cells.
    Easy,
    /// Random over the opening subset for the first plies, full search after.
    Normal,
    /// Full search for every move.
    Impossible,
}

impl Difficulty {
    /// Choose a move for `to_move` on the given position. Returns `None` when
    /// the position is terminal.
    pub fn choose_move<R: Rng>(
        self,
        position: &Position,
        to_move: Mark,
        rng: &mut R,
    ) -> Option<usize> {
        if position.winner().is_some() || position.is_full() {
            return None;
        }
        match self {
            Difficulty::Easy => random_empty(position, rng),
            // While at least 8 cells remain, at most one opening cell can be
            // taken, so the restricted choice is never empty.
            Difficulty::Normal if position.remaining() >= 8 => {
                let open: Vec<usize> = OPENING_CELLS
                    .iter()
                    .copied()
                    .filter(|&cell| position.get(cell).is_none())
                    .collect();
                Some(open[rng.gen_range(0, open.len())])
            }
            Difficulty::Normal | Difficulty::Impossible => search(position, to_move).1,
        }
    }
}

/// Uniform random choice among the empty cells.
fn random_empty<R: Rng>(position: &Position, rng: &mut R) -> Option<usize> {
    let empty: Vec<usize> = position.empty_cells().collect();
    if empty.is_empty() {
        None
    } else {
        Some(empty[rng.gen_range(0, empty.len())])
    }
}
