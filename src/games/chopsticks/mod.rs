//! Chopsticks, the finger-counting game.
//!
//! - Each player has two hands holding 1-4 fingers; 0 means the hand is dead
//! - A move taps one of your live hands onto one of the opponent's, adding
//!   your count to theirs modulo 5
//! - A player who cannot tap any hand loses
//!
//! Positions can repeat, so exhaustive search only terminates from positions
//! whose continuation graph has no cycle (see `search::is_acyclic`).

mod state;

pub use state::{ChopState, FINGERS};
