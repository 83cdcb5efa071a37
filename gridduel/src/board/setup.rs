//! Implements the setup phase of the combat board: placement validation and
//! the random placement engine.

use log::debug;
use rand::Rng;

use crate::board::{
    grid::Grid, Board, CannotPlaceReason, Cell, Dimensions, PlaceError, PlacementExhausted,
    ShipRecord,
};
use crate::ships::{Fleet, Orientation, Ship};

/// Default attempt budget for one random placement pass, shared across all
/// ships in the pass. Established empirically by the reference game.
pub const DEFAULT_PLACEMENT_BUDGET: usize = 2000;

/// Setup phase for a [`Board`]. Allows placing ships and does not allow
/// shooting.
#[derive(Debug)]
pub struct BoardSetup {
    /// Grid that ships are being placed into.
    grid: Grid,

    /// Catalog of ship lengths to place.
    fleet: Fleet,

    /// Placement of each fleet entry, if it has been placed.
    placements: Vec<Option<Ship>>,
}

impl BoardSetup {
    /// Begin setup by constructing an empty board with the given
    /// [`Dimensions`] and [`Fleet`].
    pub fn new(dim: Dimensions, fleet: Fleet) -> Self {
        let placements = vec![None; fleet.len()];
        Self {
            grid: Grid::new(dim),
            fleet,
            placements,
        }
    }

    /// Get the [`Dimensions`] of this board.
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// The fleet being placed.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Checks if this board is ready to start: all ships placed.
    pub fn ready(&self) -> bool {
        self.placements.iter().all(|p| p.is_some())
    }

    /// Check whether a ship may be placed without committing it: every cell
    /// must be in bounds and outside the occupancy set (ships and halos) of
    /// previously placed ships.
    pub fn check_place(&self, ship: &Ship) -> Result<(), CannotPlaceReason> {
        for cell in ship.cells() {
            match self.grid.get(cell) {
                None => return Err(CannotPlaceReason::OutOfBounds),
                Some(grid_cell) if grid_cell.forbidden => {
                    return Err(CannotPlaceReason::Occupied);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Attempt to place the fleet entry at `index` with the given anchor and
    /// orientation. Placement is atomic: on error nothing is committed. On
    /// success the ship's cells and its clipped exclusion halo are added to
    /// the occupancy set.
    ///
    /// Panics if `index` is outside the fleet.
    pub fn place(
        &mut self,
        index: usize,
        anchor: Cell,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        let length = self.fleet.lengths()[index];
        let ship = Ship::new(anchor, length, orientation);
        let reject = |reason| PlaceError {
            reason,
            ship: index,
            anchor,
        };
        if self.placements[index].is_some() {
            return Err(reject(CannotPlaceReason::AlreadyPlaced));
        }
        self.check_place(&ship).map_err(reject)?;

        // Every cell validated, commit.
        let dim = self.grid.dim;
        for cell in ship.cells() {
            let grid_cell = &mut self.grid[cell];
            grid_cell.ship = Some(index);
            grid_cell.forbidden = true;
            for halo_cell in dim.halo(cell) {
                self.grid[halo_cell].forbidden = true;
            }
        }
        self.placements[index] = Some(ship);
        Ok(())
    }

    /// Randomly place every remaining ship. The attempt `budget` is shared
    /// across all ships in this pass; when it runs out the pass fails with
    /// [`PlacementExhausted`] and the caller is expected to restart from an
    /// empty board.
    pub fn random_place<R: Rng>(
        &mut self,
        rng: &mut R,
        budget: usize,
    ) -> Result<(), PlacementExhausted> {
        let size = self.grid.dim.size();
        assert!(
            self.fleet.lengths().iter().all(|&len| len <= size),
            "fleet contains a ship longer than the board"
        );
        let mut attempts = 0;
        for index in 0..self.fleet.len() {
            if self.placements[index].is_some() {
                continue;
            }
            let length = self.fleet.lengths()[index];
            loop {
                attempts += 1;
                if attempts > budget {
                    return Err(PlacementExhausted { attempts: budget });
                }
                let orientation = if rng.gen() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                // Sample the anchor within the range where the ship fits, so
                // only occupancy can reject it.
                let (max_row, max_col) = match orientation {
                    Orientation::Horizontal => (size - 1, size - length),
                    Orientation::Vertical => (size - length, size - 1),
                };
                let anchor = Cell::new(
                    rng.gen_range(0, max_row + 1),
                    rng.gen_range(0, max_col + 1),
                );
                if self.place(index, anchor, orientation).is_ok() {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Tries to start the game. If all ships are placed, returns a [`Board`]
    /// with the current placements, otherwise returns self.
    pub fn start(self) -> Result<Board, Self> {
        if !self.ready() {
            Err(self)
        } else {
            Ok(Board::from_setup(
                self.grid,
                self.placements
                    .into_iter()
                    .map(|placement| {
                        let ship = placement.unwrap();
                        ShipRecord {
                            health: ship.length(),
                            ship,
                        }
                    })
                    .collect(),
            ))
        }
    }
}

/// Produce a fully populated board by repeatedly running random placement
/// passes until one succeeds. There is no bound on restarts, but reference
/// catalogs on boards of size 5 and up converge quickly.
pub fn random_board<R: Rng>(
    dim: Dimensions,
    fleet: &Fleet,
    rng: &mut R,
    budget: usize,
) -> Board {
    loop {
        let mut setup = BoardSetup::new(dim, fleet.clone());
        match setup.random_place(rng, budget) {
            Ok(()) => match setup.start() {
                Ok(board) => return board,
                // random_place leaves every ship placed.
                Err(_) => unreachable!(),
            },
            Err(err) => {
                debug!("placement pass exhausted after {} attempts, restarting", err.attempts);
            }
        }
    }
}
