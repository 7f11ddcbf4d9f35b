//! Game contract shared by every supported game.
//!
//! - `Position`: one immutable game state: turn, legal moves, transitions
//! - `Game`: a position bound to the player who started the game, with
//!   terminal and winner queries
//!
//! Search and strategies are written against these two types only.

pub mod game;
pub mod position;

pub use game::Game;
pub use position::{Position, Score, DRAW, LOSS, WIN};
