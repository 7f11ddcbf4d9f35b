//! Supported games.
//!
//! `State` is the closed set of game positions the crate ships with. It
//! implements `Position` by dispatching to the concrete variant, so the
//! default `Game` type can hold either game.

pub mod chopsticks;
pub mod subtract;

use serde::{Deserialize, Serialize};

use crate::core::{Move, Moves, PlayerId, Result};
use crate::rules::{Game, Position};

pub use chopsticks::ChopState;
pub use subtract::SubtractState;

/// A position in one of the supported games.
///
/// Positions of different games never compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    SubtractSquare(SubtractState),
    Chopsticks(ChopState),
}

impl From<SubtractState> for State {
    fn from(state: SubtractState) -> Self {
        State::SubtractSquare(state)
    }
}

impl From<ChopState> for State {
    fn from(state: ChopState) -> Self {
        State::Chopsticks(state)
    }
}

impl Position for State {
    fn current_player(&self) -> PlayerId {
        match self {
            State::SubtractSquare(s) => s.current_player(),
            State::Chopsticks(s) => s.current_player(),
        }
    }

    fn legal_moves(&self) -> Moves {
        match self {
            State::SubtractSquare(s) => s.legal_moves(),
            State::Chopsticks(s) => s.legal_moves(),
        }
    }

    fn is_legal(&self, mv: &Move) -> bool {
        match self {
            State::SubtractSquare(s) => s.is_legal(mv),
            State::Chopsticks(s) => s.is_legal(mv),
        }
    }

    fn transition(&self, mv: &Move) -> Option<Self> {
        match self {
            State::SubtractSquare(s) => s.transition(mv).map(State::from),
            State::Chopsticks(s) => s.transition(mv).map(State::from),
        }
    }

    fn parse_move(&self, text: &str) -> Result<Move> {
        match self {
            State::SubtractSquare(s) => s.parse_move(text),
            State::Chopsticks(s) => s.parse_move(text),
        }
    }

    fn instructions(&self) -> &'static str {
        match self {
            State::SubtractSquare(s) => s.instructions(),
            State::Chopsticks(s) => s.instructions(),
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::SubtractSquare(s) => std::fmt::Display::fmt(s, f),
            State::Chopsticks(s) => std::fmt::Display::fmt(s, f),
        }
    }
}

/// A game variant together with its starting parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum Variant {
    /// Subtract-square from `start`.
    SubtractSquare { start: u32 },

    /// Chopsticks with the given `[left, right]` hands.
    Chopsticks { p1: [u8; 2], p2: [u8; 2] },
}

impl Variant {
    /// Subtract-square from `start`.
    #[must_use]
    pub const fn subtract_square(start: u32) -> Self {
        Variant::SubtractSquare { start }
    }

    /// Chopsticks from the standard opening.
    #[must_use]
    pub const fn chopsticks() -> Self {
        Variant::Chopsticks {
            p1: [1, 1],
            p2: [1, 1],
        }
    }

    /// Short name of the game.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Variant::SubtractSquare { .. } => "subtract-square",
            Variant::Chopsticks { .. } => "chopsticks",
        }
    }

    /// Initial position with `first_player` to move.
    pub fn initial_state(&self, first_player: PlayerId) -> Result<State> {
        Ok(match *self {
            Variant::SubtractSquare { start } => SubtractState::new(first_player, start).into(),
            Variant::Chopsticks { p1, p2 } => ChopState::new(first_player, p1, p2)?.into(),
        })
    }

    /// Start a game with `first_player` to move.
    pub fn build(&self, first_player: PlayerId) -> Result<Game> {
        Ok(Game::new(self.initial_state(first_player)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameError, Hand};

    #[test]
    fn test_state_dispatch() {
        let state = State::from(SubtractState::new(PlayerId::P2, 8));
        assert_eq!(state.current_player(), PlayerId::P2);
        assert_eq!(state.legal_moves().as_slice(), &[Move::Subtract(1), Move::Subtract(4)]);
        assert_eq!(
            state.apply_move(&Move::Subtract(4)).unwrap(),
            State::from(SubtractState::new(PlayerId::P1, 4))
        );
    }

    #[test]
    fn test_cross_variant_moves_are_illegal() {
        let subtract = State::from(SubtractState::new(PlayerId::P1, 8));
        let chop = State::from(ChopState::opening(PlayerId::P1));

        assert!(subtract.apply_move(&Move::chop(Hand::Left, Hand::Left)).is_err());
        assert!(chop.apply_move(&Move::Subtract(1)).is_err());
    }

    #[test]
    fn test_variants_never_equal() {
        let subtract = State::from(SubtractState::new(PlayerId::P1, 2));
        let chop = State::from(ChopState::opening(PlayerId::P1));
        assert_ne!(subtract, chop);
    }

    #[test]
    fn test_variant_build() {
        let game = Variant::subtract_square(20).build(PlayerId::P2).unwrap();
        assert_eq!(game.starting_player(), PlayerId::P2);
        assert_eq!(game.state(), &State::from(SubtractState::new(PlayerId::P2, 20)));

        let game = Variant::chopsticks().build(PlayerId::P1).unwrap();
        assert_eq!(game.state(), &State::from(ChopState::opening(PlayerId::P1)));
    }

    #[test]
    fn test_variant_build_validates_hands() {
        let variant = Variant::Chopsticks {
            p1: [1, 1],
            p2: [7, 1],
        };
        assert!(matches!(
            variant.build(PlayerId::P1),
            Err(GameError::InvalidHand { value: 7 })
        ));
    }

    #[test]
    fn test_variant_serialization() {
        let variant = Variant::Chopsticks {
            p1: [1, 0],
            p2: [4, 4],
        };
        let json = serde_json::to_string(&variant).unwrap();
        assert!(json.contains("\"game\":\"chopsticks\""));
        let deserialized: Variant = serde_json::from_str(&json).unwrap();
        assert_eq!(variant, deserialized);
    }
}
