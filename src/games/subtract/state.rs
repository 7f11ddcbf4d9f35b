//! Subtract-square position.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Move, Moves, PlayerId, Result};
use crate::rules::Position;

const INSTRUCTIONS: &str = "\
1) A non-negative whole number is chosen as the starting value.
2) The player whose turn it is subtracts the square of some positive whole \
number (1, 4, 9, 16, ...) from the value, provided the square is not larger \
than the value.
3) Players alternate until no square can be subtracted. Whoever is about to \
play at that point loses.";

/// Subtract-square position: the running value and the player to move.
///
/// Two positions are equal when both the value and the player to move match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtractState {
    to_move: PlayerId,
    value: u32,
}

impl SubtractState {
    /// Create a position with `value` remaining and `to_move` to play.
    #[must_use]
    pub const fn new(to_move: PlayerId, value: u32) -> Self {
        Self { to_move, value }
    }

    /// Remaining value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Positive perfect squares not larger than the remaining value.
    fn squares(&self) -> impl Iterator<Item = u32> {
        let value = u64::from(self.value);
        (1u64..)
            .map(|i| i * i)
            .take_while(move |&square| square <= value)
            .map(|square| square as u32)
    }
}

impl Position for SubtractState {
    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn legal_moves(&self) -> Moves {
        self.squares().map(Move::Subtract).collect()
    }

    fn is_legal(&self, mv: &Move) -> bool {
        match *mv {
            Move::Subtract(amount) => {
                amount > 0 && amount <= self.value && is_perfect_square(amount)
            }
            Move::Chop { .. } => false,
        }
    }

    fn transition(&self, mv: &Move) -> Option<Self> {
        match *mv {
            Move::Subtract(amount) => Some(Self {
                to_move: self.to_move.other(),
                value: self.value.checked_sub(amount)?,
            }),
            Move::Chop { .. } => None,
        }
    }

    fn parse_move(&self, text: &str) -> Result<Move> {
        let trimmed = text.trim();
        trimmed
            .parse::<u32>()
            .map(Move::Subtract)
            .map_err(|err| GameError::InvalidMoveSyntax {
                input: trimmed.to_string(),
                reason: format!("expected a whole number ({err})"),
            })
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }
}

impl std::fmt::Display for SubtractState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The current player is {} and the current value is {}.",
            self.to_move, self.value
        )
    }
}

fn is_perfect_square(n: u32) -> bool {
    let root = f64::from(n).sqrt() as u64;
    (root.saturating_sub(1)..=root + 1).any(|r| r * r == u64::from(n))
}
