//! Decision cores for two turn-based grid games.
//!
//! [`search`] holds the marks-game engine: a pure terminal detector over the
//! 8 winning triples and an exhaustive adversarial search returning the
//! optimal move, with a difficulty policy layered above it.
//!
//! [`board`] holds the sea-battle engine: a bounded square grid, atomic
//! placement validation with one-cell exclusion halos, a bounded-retry
//! random placement engine and the shot resolver.
//!
//! [`game`] holds the turn schedulers tying either engine to two players:
//! a round/series machine with a lead-margin win condition, and a
//! single-elimination machine where a hit grants an extra turn.
//!
//! All randomized operations take a caller-supplied [`rand::Rng`], and all
//! rejected inputs come back as typed reasons for the caller to retry; the
//! library performs no I/O of its own.

pub mod board;
pub mod game;
mod logging;
pub mod search;
pub mod ships;

pub use logging::init_logging;
