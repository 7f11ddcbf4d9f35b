//! Position trait for game implementations.
//!
//! A position is one immutable game state. Each supported game implements
//! `Position` to define:
//! - Whose turn it is
//! - Which moves are legal
//! - How a move produces the next position
//!
//! Solvers and strategies only talk to this trait and never interpret
//! game-specific fields directly.

use std::fmt;
use std::hash::Hash;

use crate::core::{GameError, Move, Moves, PlayerId, Result};

/// Outcome value from the point of view of the player to move.
pub type Score = i8;

/// The player to move can force a win.
pub const WIN: Score = 1;

/// Neutral outcome. No supported game reaches it.
pub const DRAW: Score = 0;

/// The player to move loses against best play.
pub const LOSS: Score = -1;

/// Position trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: deterministic order; the solvers break ties by it.
///   Empty exactly when the position is terminal.
/// - `transition`: never called with a move outside `legal_moves` by the
///   provided methods, so it does not re-check legality.
/// - `Eq`/`Hash`: follow the game's own equality contract, which may or may
///   not include the player to move.
pub trait Position: Clone + Eq + Hash + fmt::Debug + fmt::Display {
    /// Player whose turn it is.
    fn current_player(&self) -> PlayerId;

    /// All legal moves, in tie-break order.
    fn legal_moves(&self) -> Moves;

    /// Successor position for `mv`, assuming `mv` is legal.
    ///
    /// Returns `None` if `mv` is not a move of this game at all.
    fn transition(&self, mv: &Move) -> Option<Self>;

    /// Read a move from user text. Legality is not checked.
    fn parse_move(&self, text: &str) -> Result<Move>;

    /// Rules of the game, for display.
    fn instructions(&self) -> &'static str;

    // === Convenience Methods ===

    /// Check whether `mv` is among `legal_moves()`.
    fn is_legal(&self, mv: &Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// Apply a move, producing the next position.
    ///
    /// Fails with `GameError::IllegalMove` if `mv` is not legal here;
    /// `self` is never modified.
    fn apply_move(&self, mv: &Move) -> Result<Self> {
        let illegal = || GameError::IllegalMove {
            mv: *mv,
            position: self.to_string(),
        };

        if !self.is_legal(mv) {
            return Err(illegal());
        }
        self.transition(mv).ok_or_else(illegal)
    }

    /// Check if no legal move remains.
    fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Every legal move paired with the position it leads to.
    fn successors(&self) -> Vec<(Move, Self)> {
        self.legal_moves()
            .into_iter()
            .filter_map(|mv| self.transition(&mv).map(|next| (mv, next)))
            .collect()
    }

    /// Cheap two-ply estimate of the outcome for the player to move.
    ///
    /// - terminal: `LOSS`
    /// - some move leaves the opponent stuck: `WIN`
    /// - every move lets the opponent leave us stuck: `LOSS`
    /// - otherwise `DRAW`
    fn rough_outcome(&self) -> Score {
        let next = self.successors();
        if next.is_empty() {
            return LOSS;
        }

        if next.iter().any(|(_, position)| position.is_terminal()) {
            return WIN;
        }

        let all_refuted = next.iter().all(|(_, position)| {
            position
                .successors()
                .iter()
                .any(|(_, reply)| reply.is_terminal())
        });

        if all_refuted {
            LOSS
        } else {
            DRAW
        }
    }
}
