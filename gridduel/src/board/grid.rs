//! Defines the types that make up the grid. These are shared between the
//! board's setup and playing versions.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{Cell, Dimensions};

/// A single cell in the player's grid.
#[derive(Debug, Default)]
pub(super) struct GridCell {
    /// Index of the ship that occupies this cell, if any.
    pub(super) ship: Option<usize>,

    /// Whether this cell is forbidden for future placement: it either holds a
    /// ship or lies inside a placed ship's exclusion halo. Only consulted
    /// during setup; shots ignore it.
    pub(super) forbidden: bool,

    /// Whether this cell has been explicitly shot.
    pub(super) shot: bool,

    /// Whether this cell was revealed as part of a destroyed ship's halo.
    /// Revealed cells cannot be shot, but were never explicitly targeted.
    pub(super) revealed: bool,
}

/// Grid structure shared between [`BoardSetup`][super::BoardSetup] and
/// [`Board`][super::Board].
#[derive(Debug)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board.
    pub(super) cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Cell`] coordinate.
    pub(super) fn get<B: Borrow<Cell>>(&self, cell: B) -> Option<&GridCell> {
        self.dim
            .try_linearize(cell.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Cell`] coordinate.
    pub(super) fn get_mut<B: Borrow<Cell>>(&mut self, cell: B) -> Option<&mut GridCell> {
        self.dim
            .try_linearize(cell.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<B: Borrow<Cell>> Index<B> for Grid {
    type Output = GridCell;

    fn index(&self, cell: B) -> &Self::Output {
        self.get(cell).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Cell>> IndexMut<B> for Grid {
    fn index_mut(&mut self, cell: B) -> &mut Self::Output {
        self.get_mut(cell).expect("coordinate out of bounds")
    }
}
