//! Core types shared by every game: players, moves, errors, RNG.

pub mod error;
pub mod moves;
pub mod player;
pub mod rng;

pub use error::{GameError, Result};
pub use moves::{Hand, Move, Moves};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
