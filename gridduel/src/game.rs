//! Turn schedulers for the two games.
//!
//! [`series`] runs the marks game as a series of rounds terminated by a
//! lead-margin win count, with a dice lottery assigning the first move.
//!
//! [`combat`] runs the sea-battle game as a single-elimination match where a
//! hit grants an extra turn.

use rand::Rng;

pub mod combat;
pub mod series;

/// Player ID. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Index into per-player arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

/// Dice lottery deciding who moves first: each side sums three uniform 1-6
/// draws, repeating until the totals differ. The higher total wins.
pub fn cast_lots<R: Rng>(rng: &mut R) -> Player {
    loop {
        let p1: u32 = (0..3).map(|_| rng.gen_range(1u32, 7)).sum();
        let p2: u32 = (0..3).map(|_| rng.gen_range(1u32, 7)).sum();
        if p1 != p2 {
            return if p1 > p2 { Player::P1 } else { Player::P2 };
        }
    }
}
