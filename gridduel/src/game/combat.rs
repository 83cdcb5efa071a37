//! Single-elimination scheduler for the sea-battle game.

use log::debug;
use rand::Rng;

use crate::board::{Board, CannotShootReason, Cell, Dimensions, ShotOutcome};
use crate::game::Player;

/// State of a battle between two placed boards. A hit or destruction grants
/// the shooter another turn; a miss passes control. The battle is over when
/// either fleet is fully destroyed.
#[derive(Debug)]
pub struct Battle {
    boards: [Board; 2],
    current: Player,
    winner: Option<Player>,
}

impl Battle {
    /// Start a battle between two fully placed boards, with `first` shooting
    /// first.
    pub fn new(board_p1: Board, board_p2: Board, first: Player) -> Self {
        Self {
            boards: [board_p1, board_p2],
            current: first,
            winner: None,
        }
    }

    /// The player whose turn it is.
    pub fn current(&self) -> Player {
        self.current
    }

    /// The winner, if the battle is over.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The given player's own board.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    /// Fire the current player's shot at the opponent's board. Rejected shots
    /// do not consume the turn; the move source is asked again.
    pub fn fire(&mut self, cell: Cell) -> Result<ShotOutcome, CannotShootReason> {
        if self.winner.is_some() {
            return Err(CannotShootReason::AlreadyOver);
        }
        let shooter = self.current;
        let target = shooter.opponent();
        let outcome = self.boards[target.index()].shoot(cell)?;
        match outcome {
            ShotOutcome::Miss => self.current = target,
            ShotOutcome::Hit(_) | ShotOutcome::Destroyed(_) => {}
            ShotOutcome::Defeated(_) => {
                debug!("{:?} defeated, {:?} wins", target, shooter);
                self.winner = Some(shooter);
            }
        }
        Ok(outcome)
    }
}

/// Uniform random shot: any cell on the board, without regard to shot
/// history. Retrying rejected shots is the caller's job.
pub fn random_shot<R: Rng>(dim: &Dimensions, rng: &mut R) -> Cell {
    Cell::new(
        rng.gen_range(0, dim.size()),
        rng.gen_range(0, dim.size()),
    )
}
