//! Move sources for the players of a match.
//!
//! A `Strategy` chooses a move for whoever is to move in a game. The match
//! driver in `play` asks one strategy per player and never cares whether
//! the move came from a keyboard, a die roll or a full game-tree search.
//!
//! - `Interactive`: prompt a human on a reader/writer pair
//! - `RandomMove`: uniform over the legal moves
//! - `RoughOutcome`: two-ply heuristic
//! - `RecursiveMinimax` / `IterativeMinimax`: exhaustive search

pub mod automatic;
pub mod interactive;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, Move, Result};
use crate::games::State;
use crate::rules::{Game, Position};

pub use automatic::{IterativeMinimax, RandomMove, RecursiveMinimax, RoughOutcome};
pub use interactive::Interactive;

/// Chooses moves for the player to move.
pub trait Strategy<S: Position = State> {
    /// Short name, for logs.
    fn name(&self) -> &'static str;

    /// Choose a legal move for the player to move in `game`.
    ///
    /// Fails with `GameError::GameOver` if `game` has no legal move.
    fn choose_move(&mut self, game: &Game<S>) -> Result<Move>;
}

impl<S: Position, T: Strategy<S> + ?Sized> Strategy<S> for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn choose_move(&mut self, game: &Game<S>) -> Result<Move> {
        (**self).choose_move(game)
    }
}

/// Strategy selector used by configuration and the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Interactive,
    Random,
    RoughOutcome,
    RecursiveMinimax,
    IterativeMinimax,
}

impl StrategyKind {
    /// All selectable strategies.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Interactive,
        StrategyKind::Random,
        StrategyKind::RoughOutcome,
        StrategyKind::RecursiveMinimax,
        StrategyKind::IterativeMinimax,
    ];

    /// Name as accepted by `from_str`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Interactive => "interactive",
            StrategyKind::Random => "random",
            StrategyKind::RoughOutcome => "rough-outcome",
            StrategyKind::RecursiveMinimax => "recursive-minimax",
            StrategyKind::IterativeMinimax => "iterative-minimax",
        }
    }

    /// Whether this strategy searches the full game tree.
    #[must_use]
    pub const fn is_exhaustive(self) -> bool {
        matches!(
            self,
            StrategyKind::RecursiveMinimax | StrategyKind::IterativeMinimax
        )
    }

    /// Instantiate the strategy. Random strategies draw a fork of `rng`;
    /// interactive ones talk to stdin/stdout.
    pub fn build<S: Position + 'static>(self, rng: &mut GameRng) -> Box<dyn Strategy<S>> {
        match self {
            StrategyKind::Interactive => Box::new(Interactive::stdio()),
            StrategyKind::Random => Box::new(RandomMove::from_rng(rng.fork())),
            StrategyKind::RoughOutcome => Box::new(RoughOutcome),
            StrategyKind::RecursiveMinimax => Box::new(RecursiveMinimax),
            StrategyKind::IterativeMinimax => Box::new(IterativeMinimax),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| GameError::InvalidConfiguration {
                message: format!(
                    "unknown strategy '{wanted}' (expected one of: {})",
                    StrategyKind::ALL.map(StrategyKind::name).join(", ")
                ),
            })
    }
}
