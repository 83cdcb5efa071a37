//! Square board dimensions: bounds checking, index linearization and halo
//! neighborhoods.

use std::borrow::Borrow;

use crate::board::errors::DimensionsError;
use crate::board::Cell;

/// Smallest supported combat board.
pub const MIN_SIZE: usize = 5;
/// Largest supported combat board.
pub const MAX_SIZE: usize = 10;

/// Dimensions of a square combat board.
///
/// Implements the methods needed by the board to check bounds, linearize
/// coordinates and compute the exclusion halo around a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    size: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the given side length. Returns an error
    /// if the size is outside the supported `5..=10` range.
    pub fn new(size: usize) -> Result<Self, DimensionsError> {
        if (MIN_SIZE..=MAX_SIZE).contains(&size) {
            Ok(Self { size })
        } else {
            Err(DimensionsError { size })
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compute the total number of cells. Used to allocate storage for the
    /// board.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Check if the given [`Cell`] is in bounds. If so, return it, otherwise
    /// return `None`.
    #[inline]
    pub fn check_bounds<B: Borrow<Cell>>(&self, cell: B) -> Option<B> {
        let c = cell.borrow();
        if c.row < self.size && c.col < self.size {
            Some(cell)
        } else {
            None
        }
    }

    /// Convert a cell to a linear index within these dimensions.
    /// Returns `None` if the cell is out of bounds.
    pub fn try_linearize(&self, cell: &Cell) -> Option<usize> {
        self.check_bounds(cell).map(|c| c.row * self.size + c.col)
    }

    /// Convert a linear index back into a [`Cell`].
    pub fn un_linearize(&self, idx: usize) -> Cell {
        Cell {
            row: idx / self.size,
            col: idx % self.size,
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over
    /// the cells of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Cell>> {
        let size = self.size;
        (0..size).map(move |row| (0..size).map(move |col| Cell { row, col }))
    }

    /// Iterate the exclusion halo of the given cell: the up-to-8 surrounding
    /// cells, clipped to the board. Cells on an edge or corner yield fewer
    /// neighbors.
    pub fn halo(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        const RING: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        RING.iter().filter_map(move |&(dr, dc)| {
            let row = checked_offset(cell.row, dr)?;
            let col = checked_offset(cell.col, dc)?;
            self.check_bounds(Cell { row, col })
        })
    }
}

impl Default for Dimensions {
    /// The reference board: 6x6.
    fn default() -> Self {
        Self { size: 6 }
    }
}

/// Apply a signed single-step offset to an index, rejecting underflow.
fn checked_offset(base: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        base.checked_sub(delta.unsigned_abs())
    } else {
        Some(base + delta as usize)
    }
}
