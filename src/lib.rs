//! # rust-minimax
//!
//! Exhaustive game-tree search for small two-player, zero-sum games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Search**: Solvers only see the `Position` trait.
//!    Adding a game means implementing `Position`; nothing in `search`
//!    changes.
//!
//! 2. **Normal-Play Convention**: The player left without a legal move
//!    loses. There are no draws in play, so a position is worth exactly
//!    `WIN` or `LOSS` to its player to move.
//!
//! 3. **Value Semantics**: States are small `Copy` values. Applying a move
//!    produces a new state and never mutates the old one, so search can
//!    branch freely.
//!
//! ## Games
//!
//! - **Subtract-square**: remove a positive perfect square from a counter;
//!   whoever reaches 0 wins.
//! - **Chopsticks**: tap an opponent's hand with one of yours, adding your
//!   fingers to theirs modulo 5; whoever has two empty hands loses.
//!
//! ## Modules
//!
//! - `core`: players, moves, errors, RNG
//! - `rules`: the `Position` trait and the `Game` wrapper
//! - `games`: the concrete games
//! - `search`: `score`, `recursive_minimax`, `iterative_minimax`
//! - `strategy`: move sources for each player (human, random, heuristic,
//!   search)
//! - `play`: match configuration, turn loop and transcripts

pub mod core;
pub mod games;
pub mod play;
pub mod rules;
pub mod search;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, Hand, Move, PlayerId, PlayerMap, Result};

pub use crate::rules::{Game, Position, Score, DRAW, LOSS, WIN};

pub use crate::games::{ChopState, State, SubtractState, Variant};

pub use crate::search::{
    is_acyclic, iterative_minimax, reachable_positions, recursive_minimax, score, SearchTree,
    TreeStats,
};

pub use crate::strategy::{Strategy, StrategyKind};

pub use crate::play::{MatchConfig, MatchOutcome, Session, Transcript};
