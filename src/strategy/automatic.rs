//! Computer players.

use crate::core::{GameError, GameRng, Move, Result};
use crate::rules::{Game, Position, Score};
use crate::search::{iterative_minimax, recursive_minimax};

use super::Strategy;

// =============================================================================
// Random
// =============================================================================

/// Uniform random choice among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomMove {
    rng: GameRng,
}

impl RandomMove {
    /// Random player seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Random player drawing from an existing stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<S: Position> Strategy<S> for RandomMove {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&mut self, game: &Game<S>) -> Result<Move> {
        let moves = game.legal_moves();
        self.rng.choose(&moves).copied().ok_or(GameError::GameOver)
    }
}

// =============================================================================
// Rough outcome
// =============================================================================

/// Picks the move whose resulting position looks worst for the opponent
/// under `Position::rough_outcome`. Ties go to the earlier move.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoughOutcome;

impl<S: Position> Strategy<S> for RoughOutcome {
    fn name(&self) -> &'static str {
        "rough-outcome"
    }

    fn choose_move(&mut self, game: &Game<S>) -> Result<Move> {
        let mut best: Option<(Move, Score)> = None;

        for (mv, next) in game.successors() {
            let guess = -next.state().rough_outcome();
            log::trace!("rough outcome: {} guesses {}", mv, guess);
            if best.map_or(true, |(_, value)| guess > value) {
                best = Some((mv, guess));
            }
        }

        best.map(|(mv, _)| mv).ok_or(GameError::GameOver)
    }
}

// =============================================================================
// Minimax
// =============================================================================

/// Exhaustive search with `recursive_minimax`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveMinimax;

impl<S: Position> Strategy<S> for RecursiveMinimax {
    fn name(&self) -> &'static str {
        "recursive-minimax"
    }

    fn choose_move(&mut self, game: &Game<S>) -> Result<Move> {
        recursive_minimax(game).ok_or(GameError::GameOver)
    }
}

/// Exhaustive search with `iterative_minimax`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IterativeMinimax;

impl<S: Position> Strategy<S> for IterativeMinimax {
    fn name(&self) -> &'static str {
        "iterative-minimax"
    }

    fn choose_move(&mut self, game: &Game<S>) -> Result<Move> {
        iterative_minimax(game).ok_or(GameError::GameOver)
    }
}
