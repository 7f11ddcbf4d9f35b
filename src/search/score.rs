//! Negamax scoring.

use crate::rules::{Game, Position, Score, LOSS};

/// Best achievable outcome for the player to move in `game`.
///
/// A player with no legal move loses, so every terminal position scores
/// `LOSS`. Otherwise the value is the best of the negated values of every
/// successor, explored exhaustively. Recursion depth equals the length of
/// the longest line of play.
pub fn score<S: Position>(game: &Game<S>) -> Score {
    game.successors()
        .map(|(_, next)| -score(&next))
        .max()
        .unwrap_or(LOSS)
}
