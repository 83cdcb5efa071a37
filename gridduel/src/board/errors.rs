//! Errors used by the combat board and its setup phase.

use thiserror::Error;

use crate::board::Cell;

/// Error returned when constructing [`Dimensions`][crate::board::Dimensions]
/// with an unsupported size.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("board size {size} is outside the supported 5..=10 range")]
pub struct DimensionsError {
    /// The rejected size.
    pub size: usize,
}

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the ship's cells falls outside the board.
    #[error("the ship does not fit within the board at the specified position")]
    OutOfBounds,
    /// One or more of the ship's cells is occupied or inside another ship's
    /// exclusion halo.
    #[error("the requested position was already occupied")]
    Occupied,
    /// The ship was already placed.
    #[error("ship was already placed")]
    AlreadyPlaced,
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The battle was already decided.
    #[error("the game is already over")]
    AlreadyOver,
    /// The cell selected was out of bounds on the board.
    #[error("the target cell is out of bounds")]
    OutOfBounds,
    /// A shot has already been fired at that cell, or the cell belongs to the
    /// revealed halo of a destroyed ship.
    #[error("the target cell was already shot")]
    AlreadyShot,
}

/// Error returned when a random placement pass runs out of attempts.
/// Recoverable: the caller restarts from an empty board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place fleet within {attempts} attempts")]
pub struct PlacementExhausted {
    /// Number of attempts consumed by the failed pass.
    pub attempts: usize,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place ship {ship} at {anchor:?}: {reason}")]
pub struct PlaceError {
    /// Reason why placement was rejected.
    #[source]
    pub reason: CannotPlaceReason,
    /// Index of the ship within the fleet.
    pub ship: usize,
    /// Anchor cell where placement was attempted.
    pub anchor: Cell,
}
