//! Subtract-square.
//!
//! A single running value; each move subtracts a positive perfect square no
//! larger than it. The player facing 0 has no move and loses. Every move
//! strictly decreases the value, so exhaustive search always terminates.

mod state;

pub use state::SubtractState;
