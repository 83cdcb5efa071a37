//! Types used for defining ships and fleet catalogs.

use crate::board::{Cell, Dimensions};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A linear ship: an anchor cell extended `length - 1` steps along the
/// orientation axis. The anchor is the topmost (vertical) or leftmost
/// (horizontal) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    anchor: Cell,
    length: usize,
    orientation: Orientation,
}

impl Ship {
    /// Construct a ship with the given anchor, length and orientation.
    /// Panics if `length` is 0; placement bounds are checked by the board,
    /// not here.
    pub fn new(anchor: Cell, length: usize, orientation: Orientation) -> Self {
        assert!(length > 0, "ship length must be nonzero");
        Self {
            anchor,
            length,
            orientation,
        }
    }

    /// The anchor cell of this ship.
    pub fn anchor(&self) -> Cell {
        self.anchor
    }

    /// The length of this ship.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The orientation of this ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Iterate the cells occupied by this ship. Cells beyond the board edge
    /// are still yielded; bounds checking is the placement validator's job.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let Cell { row, col } = self.anchor;
        let orientation = self.orientation;
        (0..self.length).map(move |step| match orientation {
            Orientation::Horizontal => Cell::new(row, col + step),
            Orientation::Vertical => Cell::new(row + step, col),
        })
    }

    /// Whether the ship fits entirely within the given dimensions.
    pub fn in_bounds(&self, dim: &Dimensions) -> bool {
        self.cells().all(|cell| dim.check_bounds(cell).is_some())
    }
}

/// An ordered catalog of ship lengths making up one player's fleet, longest
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    lengths: Vec<usize>,
}

impl Fleet {
    /// Reference catalog: one length-4, two length-3, three length-2 and four
    /// length-1 ships.
    pub const REFERENCE: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

    /// Construct a fleet from an explicit list of lengths. Panics if any
    /// length is 0 or the list is empty.
    pub fn new(lengths: Vec<usize>) -> Self {
        assert!(!lengths.is_empty(), "fleet must contain at least one ship");
        assert!(lengths.iter().all(|&len| len > 0), "ship lengths must be nonzero");
        Self { lengths }
    }

    /// The full reference fleet for a 10x10 board.
    pub fn reference() -> Self {
        Self::new(Self::REFERENCE.to_vec())
    }

    /// The reference fleet scaled to the given board: smaller boards drop the
    /// longest ships first. The 6x6 reference board keeps 7 ships.
    pub fn scaled(dim: &Dimensions) -> Self {
        let drop = 9usize.saturating_sub(dim.size());
        Self::new(Self::REFERENCE[drop..].to_vec())
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Whether the fleet is empty. Never true for fleets built through the
    /// public constructors.
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// The catalog of lengths, longest first for the built-in fleets.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }
}
