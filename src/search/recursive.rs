//! Recursive minimax move selection.

use crate::core::Move;
use crate::rules::{Game, Position, Score, WIN};

use super::score::score;

/// Pick a move for the player to move using recursive negamax.
///
/// Returns the first move (in `legal_moves()` order) that forces a win. If
/// no move forces a win, returns the first legal move. Returns `None` only
/// when the game is already over.
pub fn recursive_minimax<S: Position>(game: &Game<S>) -> Option<Move> {
    let scored: Vec<(Move, Score)> = game
        .successors()
        .map(|(mv, next)| (mv, -score(&next)))
        .collect();

    for (mv, value) in &scored {
        log::debug!("recursive minimax: {} scores {}", mv, value);
    }

    select(&scored)
}

/// First forced win, else the first candidate.
pub(crate) fn select(scored: &[(Move, Score)]) -> Option<Move> {
    scored
        .iter()
        .find(|(_, value)| *value == WIN)
        .or_else(|| scored.first())
        .map(|(mv, _)| *mv)
}
