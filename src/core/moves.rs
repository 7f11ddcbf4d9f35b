//! Symbolic move tokens.
//!
//! Every supported game variant has its own move shape, but all of them are
//! presented to players as short strings: a decimal number for
//! subtract-square (`"4"`) and a two-letter hand pair for chopsticks
//! (`"lr"` = my left hand taps the opponent's right hand). `Display` yields
//! that string; parsing lives with each state type since the accepted syntax
//! depends on the variant being played.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Legal move list. Branching factors in the supported games stay small.
pub type Moves = SmallVec<[Move; 4]>;

/// One of a player's two hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// Both hands, in enumeration order.
    pub const ALL: [Hand; 2] = [Hand::Left, Hand::Right];

    /// Slot index (0 for left, 1 for right).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }

    /// Single-letter symbol: `l` or `r`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Hand::Left => 'l',
            Hand::Right => 'r',
        }
    }

    /// Parse a single-letter symbol, ignoring case.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'l' => Some(Hand::Left),
            'r' => Some(Hand::Right),
            _ => None,
        }
    }
}

/// A move in one of the supported games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Subtract this perfect square from the running value.
    Subtract(u32),

    /// Add the mover's `from` hand onto the opponent's `to` hand.
    Chop { from: Hand, to: Hand },
}

impl Move {
    /// Shorthand for a chopsticks move.
    #[must_use]
    pub const fn chop(from: Hand, to: Hand) -> Self {
        Move::Chop { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Subtract(amount) => write!(f, "{amount}"),
            Move::Chop { from, to } => write!(f, "{}{}", from.symbol(), to.symbol()),
        }
    }
}
