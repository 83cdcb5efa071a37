//! Series scheduler for the marks game: rounds from empty board to win or
//! draw, with a lead-margin series win condition.

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::game::{cast_lots, Player};
use crate::search::{self, Mark, Position};

/// Default lead in round wins that ends a series.
pub const DEFAULT_WIN_MARGIN: u32 = 3;

/// Reason why a move was rejected by the series scheduler. Rejected moves do
/// not consume a turn; the move source is asked again.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotMarkReason {
    /// The series was already decided.
    #[error("the series is already over")]
    AlreadyOver,
    /// The cell index is not on the board.
    #[error("the cell index is out of bounds")]
    OutOfBounds,
    /// The cell already holds a mark.
    #[error("the cell is already occupied")]
    Occupied,
}

/// Outcome of an accepted move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RoundOutcome {
    /// The round goes on; the other side moves next.
    Continue,
    /// The mover completed a triple. The board was reset, the winner holds X
    /// and moves first in the new round.
    RoundWon(Player),
    /// The round win gave the mover the series. Terminal.
    SeriesWon(Player),
    /// The board filled with no winner. The board was reset and the lottery
    /// re-drew the first move.
    Draw,
}

/// State of a series of rounds between two players.
#[derive(Debug)]
pub struct Series {
    board: Position,
    /// Mark held by each player in the current round.
    marks: [Mark; 2],
    /// Round wins per player. Persist across rounds, reset only with a new
    /// series.
    wins: [u32; 2],
    margin: u32,
    to_move: Player,
    winner: Option<Player>,
}

impl Series {
    /// Start a series with the given win margin. The lottery decides who
    /// holds X and moves first. Panics if `margin` is 0.
    pub fn new<R: Rng>(margin: u32, rng: &mut R) -> Self {
        assert!(margin > 0, "win margin must be nonzero");
        let first = cast_lots(rng);
        Self {
            board: Position::new(),
            marks: Self::marks_for(first),
            wins: [0; 2],
            margin,
            to_move: first,
            winner: None,
        }
    }

    fn marks_for(x_holder: Player) -> [Mark; 2] {
        let mut marks = [Mark::O; 2];
        marks[x_holder.index()] = Mark::X;
        marks
    }

    /// The current round's board.
    pub fn board(&self) -> &Position {
        &self.board
    }

    /// The player whose turn it is.
    pub fn current(&self) -> Player {
        self.to_move
    }

    /// The mark the given player holds in the current round.
    pub fn mark_of(&self, player: Player) -> Mark {
        self.marks[player.index()]
    }

    /// Round wins of the given player.
    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    /// The series winner, if the series is over.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Play the current player's mark at `cell` (row-major 0..9). The rng is
    /// used for the re-lottery after a drawn round.
    pub fn play<R: Rng>(
        &mut self,
        cell: usize,
        rng: &mut R,
    ) -> Result<RoundOutcome, CannotMarkReason> {
        if self.winner.is_some() {
            return Err(CannotMarkReason::AlreadyOver);
        }
        let mover = self.to_move;
        self.board
            .place(cell, self.marks[mover.index()])
            .map_err(|reason| match reason {
                search::CannotMarkReason::OutOfBounds => CannotMarkReason::OutOfBounds,
                search::CannotMarkReason::Occupied => CannotMarkReason::Occupied,
            })?;

        if self.board.winner().is_some() {
            self.wins[mover.index()] += 1;
            debug!(
                "round won by {:?}, score {}-{}",
                mover, self.wins[0], self.wins[1]
            );
            // Winner takes X and the first move of the next round.
            self.board = Position::new();
            self.marks = Self::marks_for(mover);
            self.to_move = mover;
            let lead =
                self.wins[mover.index()].saturating_sub(self.wins[mover.opponent().index()]);
            if lead >= self.margin {
                self.winner = Some(mover);
                return Ok(RoundOutcome::SeriesWon(mover));
            }
            return Ok(RoundOutcome::RoundWon(mover));
        }

        if self.board.is_full() {
            // Drawn round: fresh board, fresh lottery.
            debug!("round drawn, re-drawing lottery");
            self.board = Position::new();
            let first = cast_lots(rng);
            self.marks = Self::marks_for(first);
            self.to_move = first;
            return Ok(RoundOutcome::Draw);
        }

        self.to_move = mover.opponent();
        Ok(RoundOutcome::Continue)
    }
}
