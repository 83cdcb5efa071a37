//! Types that make up the combat board: coordinates, dimensions, the playing
//! board and its setup phase.

use self::grid::Grid;
pub use self::{
    coordinate::Cell,
    dimensions::{Dimensions, MAX_SIZE, MIN_SIZE},
    errors::{
        CannotPlaceReason, CannotShootReason, DimensionsError, PlaceError, PlacementExhausted,
    },
    setup::{random_board, BoardSetup, DEFAULT_PLACEMENT_BUDGET},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
pub mod setup;

use crate::ships::Ship;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the ship with the given index, but did not destroy it.
    Hit(usize),
    /// The shot destroyed the ship with the given index, but the player has
    /// more ships left.
    Destroyed(usize),
    /// The shot destroyed the ship with the given index, and all of the
    /// player's ships are now destroyed.
    Defeated(usize),
}

impl ShotOutcome {
    /// Get the index of the ship that was hit, if any.
    pub fn ship(&self) -> Option<usize> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(id) | ShotOutcome::Destroyed(id) | ShotOutcome::Defeated(id) => {
                Some(id)
            }
        }
    }
}

/// Display model for a single cell, consumed by an external renderer.
/// Symbols are the renderer's concern; whether un-hit ships are shown is the
/// renderer's choice (own board vs opponent board).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellView {
    /// Nothing known about this cell.
    Empty,
    /// An un-hit ship segment.
    Ship,
    /// A hit ship segment.
    Hit,
    /// An explicit shot that hit nothing.
    Miss,
    /// Part of a destroyed ship's revealed exclusion halo.
    Halo,
}

/// A placed ship together with its remaining health. Health starts at the
/// ship's length and drops by one per distinct hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShipRecord {
    pub(crate) ship: Ship,
    pub(crate) health: usize,
}

/// Represents a single player's combat board during play: placed ships, shot
/// history and destroyed-ship bookkeeping.
#[derive(Debug)]
pub struct Board {
    /// Grid of cells.
    grid: Grid,

    /// Ships in fleet order, with their remaining health.
    ships: Vec<ShipRecord>,

    /// Number of destroyed ships. The board is defeated when this reaches the
    /// fleet size.
    destroyed: usize,
}

impl Board {
    pub(crate) fn from_setup(grid: Grid, ships: Vec<ShipRecord>) -> Self {
        Self {
            grid,
            ships,
            destroyed: 0,
        }
    }

    /// Get the [`Dimensions`] of this board.
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Number of ships on this board.
    pub fn fleet_size(&self) -> usize {
        self.ships.len()
    }

    /// Number of ships destroyed so far.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// Remaining health of the ship at `index`. Panics if the index is
    /// outside the fleet.
    pub fn health(&self, index: usize) -> usize {
        self.ships[index].health
    }

    /// Returns true if all of this player's ships have been destroyed.
    pub fn defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    /// Fire a shot at this board, returning the reason the shot was rejected
    /// or its outcome. Duplicate shots and shots at revealed halo cells are
    /// rejected; halo cells that were never shot nor revealed are legal
    /// targets.
    pub fn shoot(&mut self, cell: Cell) -> Result<ShotOutcome, CannotShootReason> {
        if self.defeated() {
            return Err(CannotShootReason::AlreadyOver);
        }
        let hit_ship = match self.grid.get_mut(cell) {
            None => return Err(CannotShootReason::OutOfBounds),
            Some(grid_cell) if grid_cell.shot || grid_cell.revealed => {
                return Err(CannotShootReason::AlreadyShot);
            }
            Some(grid_cell) => {
                grid_cell.shot = true;
                grid_cell.ship
            }
        };
        Ok(match hit_ship {
            None => ShotOutcome::Miss,
            Some(index) => {
                let record = &mut self.ships[index];
                record.health -= 1;
                if record.health == 0 {
                    self.destroyed += 1;
                    self.reveal_halo(index);
                    if self.defeated() {
                        ShotOutcome::Defeated(index)
                    } else {
                        ShotOutcome::Destroyed(index)
                    }
                } else {
                    ShotOutcome::Hit(index)
                }
            }
        })
    }

    /// Mark the exclusion halo of a destroyed ship as visible. Cells already
    /// shot or occupied by a ship are left alone; revealed cells become
    /// untargetable.
    fn reveal_halo(&mut self, index: usize) {
        let dim = self.grid.dim;
        let ship = self.ships[index].ship;
        for cell in ship.cells() {
            for halo_cell in dim.halo(cell) {
                let grid_cell = &mut self.grid[halo_cell];
                if grid_cell.ship.is_none() && !grid_cell.shot {
                    grid_cell.revealed = true;
                }
            }
        }
    }

    /// Display model for the cell at the given coordinate. Returns `None` if
    /// the coordinate is out of bounds.
    pub fn cell_view(&self, cell: Cell) -> Option<CellView> {
        self.grid.get(cell).map(|grid_cell| {
            match (grid_cell.ship, grid_cell.shot, grid_cell.revealed) {
                (Some(_), true, _) => CellView::Hit,
                (Some(_), false, _) => CellView::Ship,
                (None, true, _) => CellView::Miss,
                (None, false, true) => CellView::Halo,
                (None, false, false) => CellView::Empty,
            }
        })
    }

    /// Get an iterator over the rows of this board's display model. The
    /// iterator's item is another iterator over a single row.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellView> + '_> + '_ {
        self.grid.dim.iter_coordinates().map(move |row| {
            row.map(move |cell| self.cell_view(cell).expect("iterated cell in bounds"))
        })
    }
}
